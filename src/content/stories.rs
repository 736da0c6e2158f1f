//! Section 8: persona-driven customer stories.

use crate::compose::{Composer, ProfileLine};
use crate::error::Result;
use crate::model::TextRun;

pub(crate) const TITLE: &str = "Section 8: Customer Stories";

/// One persona story.
struct Story {
    heading: &'static str,
    name: &'static str,
    role: &'static str,
    reach: &'static str,
    /// Situation, challenge, discovery, journey and outcome, in order
    beats: [&'static str; 5],
    quote: &'static str,
    attribution: &'static str,
    helped: &'static str,
}

const BEAT_LABELS: [&str; 5] = [
    "The Situation: ",
    "The Challenge: ",
    "The Discovery: ",
    "The Journey: ",
    "The Outcome: ",
];

const STORIES: [Story; 4] = [
    Story {
        heading: "Jasmine's Story: \"I Almost Signed the Wrong Deal\"",
        name: "Jasmine \"Jazz\" Carter",
        role: "High School Senior • Basketball • Oakland, CA",
        reach: "12K Instagram • 8K TikTok",
        beats: [
            "Senior year, Jazz's highlight reel goes viral. Within a week, she has 15 DMs from \
             brands wanting to pay her for posts. She's excited—but also confused.",
            "Is this even legal in California? Will accepting a deal affect her Stanford \
             recruitment? Her mom is skeptical. Her coach says \"be careful.\" But no one has \
             actual answers.",
            "Her school's athletic director introduces ChatNIL as a required educational tool for \
             any athlete considering NIL activities.",
            "Day 1, the AI Coach asks about her goals—not her follower count. By Week 1, she \
             learns California allows HS NIL with restrictions. Week 2, she completes the Identity \
             pillar and understands her personal brand. Week 3, her mom approves consent after \
             seeing it's educational. By Month 1, she's earned her first badge and knows what a \
             legitimate deal looks like.",
            "By graduation, Jazz knows the difference between a real opportunity and a scam. She \
             turns down two sketchy offers. When she gets to Stanford, she's ready—and her \
             compliance officer is impressed.",
        ],
        quote: "\"ChatNIL taught me what questions to ask before I even knew what questions to ask.\"",
        attribution: "Jasmine Carter",
        helped: "Discovery conversation taught state rules, 4-pillar education prepared her for \
                 college NIL, parent consent kept her family involved and protected.",
    },
    Story {
        heading: "Darius's Story: \"The $25,000 Red Flag\"",
        name: "Darius \"D-Money\" Johnson",
        role: "College Junior • Basketball • NC State University",
        reach: "85K Instagram Followers",
        beats: [
            "D-Money is having a breakout season. A \"sports marketing firm\" offers him $25,000 \
             for \"brand ambassador\" work. Easy money, right?",
            "Something feels off. The company name sounds like a booster collective. His teammate \
             got suspended last year for a similar deal. But $25,000 is life-changing money.",
            "NC State's compliance office requires all deals validated through ChatNIL before \
             signing.",
            "Darius enters the deal details into the validator. The system returns a RED score: \
             42/100. The breakdown shows: FMV inflated 200%, booster-connected flag, vague \
             deliverables. The AI explains why this screams \"pay-for-play.\" Darius declines the \
             deal.",
            "Two weeks later, the \"marketing firm\" is exposed as a booster collective. Three \
             athletes at rival schools lose eligibility. Darius finds a legitimate apparel deal \
             for $8,000 that scores GREEN (88/100). He stays eligible and stays smart.",
        ],
        quote: "\"That RED score saved my career. I almost threw away everything for $25K.\"",
        attribution: "Darius Johnson",
        helped: "6-dimension scoring flagged the deal as RED (booster-connected, inflated FMV). AI \
                 explained the risks. Darius declined and found a legitimate deal instead.",
    },
    Story {
        heading: "Michelle's Story: \"I Finally Understand What My Daughter Is Doing\"",
        name: "Michelle Carter",
        role: "Parent • Registered Nurse • Oakland, CA",
        reach: "Mother of Jasmine Carter",
        beats: [
            "Jasmine asks permission to join \"some NIL platform.\" Michelle's first thought: \
             \"What is NIL and why does my daughter need it?\"",
            "She Googles NIL and finds horror stories—kids signing bad contracts, losing \
             eligibility, getting scammed. She wants to say no, but doesn't want to hold Jasmine \
             back.",
            "The ChatNIL consent email explains exactly what the platform does and doesn't do. \
             It's education, not a marketplace. No one is trying to sell her daughter to brands.",
            "Michelle reads the consent explanation and sees it's not connecting her daughter to \
             brands. She creates a parent account and approves consent. Each week, she checks the \
             dashboard and sees Jasmine earning badges. She gets a notification when Jasmine \
             completes the Money pillar. She realizes her daughter now understands taxes better \
             than most adults.",
            "Michelle goes from skeptic to advocate. She tells other parents at Jasmine's games \
             about ChatNIL. \"It's the only platform that put my daughter's education first.\"",
        ],
        quote: "\"I went from 'What is NIL?' to recommending ChatNIL to every parent I know.\"",
        attribution: "Michelle Carter",
        helped: "Consent flow explained the platform clearly. Parent dashboard provided visibility \
                 without control. Activity feed showed education happening, not exploitation.",
    },
    Story {
        heading: "Angela's Story: \"Zero Violations in Year One\"",
        name: "Angela Washington, J.D.",
        role: "Compliance Officer • Atlantic Coast University",
        reach: "D1 • 650 Athletes • 22 Sports",
        beats: [
            "New NCAA rules, new state laws, and 650 athletes who all think they're the next NIL \
             millionaire. Angela's inbox is drowning.",
            "Her 4-person staff can't manually review every deal. Last year, another school \
             missed a booster deal and got hit with a $2M penalty. She can't let that happen here.",
            "Angela evaluates ChatNIL's compliance tools. The 6-dimension scoring system speaks \
             her language. The audit trail is exactly what NCAA investigators ask for.",
            "Angela onboards all 650 athletes over two weeks. The dashboard immediately shows 12 \
             athletes in RED status. She investigates: 8 are booster-connected deals, 4 have FMV \
             issues. Athletes fix or decline the deals before signing. She exports NCAA-compliant \
             reports with one click.",
            "Year-end audit comes. Angela has documentation for every deal, every override, every \
             decision. Zero violations. The AD asks her to present ChatNIL to the athletic \
             conference. \"This is how compliance should work.\"",
        ],
        quote: "\"ChatNIL gave me my weekends back. I'm not chasing athletes for paperwork anymore.\"",
        attribution: "Angela Washington, J.D.",
        helped: "Athletes self-validate deals. Real-time dashboard surfaces problems. Audit trail \
                 provides NCAA-ready documentation. Compliance at scale without additional staff.",
    },
];

fn story(c: &mut Composer<'_>, story: &Story) -> Result<()> {
    // story headings keep the default level-2 size
    for run in c.heading(story.heading, 2)?.runs_mut() {
        run.style.font_size = None;
    }
    c.profile_card(&[
        ProfileLine::Strong("[Photo Placeholder]"),
        ProfileLine::Strong(story.name),
        ProfileLine::Plain(story.role),
        ProfileLine::Plain(story.reach),
    ]);
    c.spacer();

    for (label, beat) in BEAT_LABELS.iter().zip(story.beats) {
        c.labeled(*label, beat);
    }

    c.spacer();
    c.pull_quote(story.quote, story.attribution);
    c.spacer();
    c.highlight("How ChatNIL Helped: ", story.helped);
    Ok(())
}

pub(super) fn customer_stories(c: &mut Composer<'_>) -> Result<()> {
    c.section(TITLE, |c| {
        let dark = c.theme().dark_gray;
        c.styled([TextRun::italic("Real Problems, Real Solutions")
            .with_size(16.0)
            .with_color(dark)]);
        c.spacer();
        c.paragraph(
            "These stories represent the real challenges our four user types face in the NIL \
             landscape—and how ChatNIL's compliance-first approach solves them. Each persona is \
             fictional, but the problems they face are happening to thousands of athletes, \
             parents, and compliance officers right now.",
        );
        c.spacer();

        let last = STORIES.len() - 1;
        for (i, entry) in STORIES.iter().enumerate() {
            story(c, entry)?;
            if i < last {
                c.spacer();
                c.page_break();
            }
        }
        Ok(())
    })
}
