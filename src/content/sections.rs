//! Numbered report sections 1 through 7.

use crate::compose::Composer;
use crate::error::Result;
use crate::model::TextRun;

/// Bold lead-in line followed by a plain bullet list.
fn topic(c: &mut Composer<'_>, title: &str, items: &[&str]) {
    c.bold_line(title);
    c.bullet_list(items, false);
}

/// The `Component | Purpose` table used by every dashboard walkthrough.
fn components(c: &mut Composer<'_>, rows: &[[&str; 2]]) -> Result<()> {
    c.table(&["Component", "Purpose"], rows, true)?;
    Ok(())
}

pub(super) fn problem(c: &mut Composer<'_>) -> Result<()> {
    c.section("Section 1: The Problem We Solve", |c| {
        c.heading("The Current NIL Mess", 2)?;
        c.paragraph(
            "The NIL landscape is governed by two conflicting frameworks that have created \
             unprecedented confusion for athletes, schools, and brands:",
        );
        c.table(
            &["Framework", "Source", "Key Feature"],
            [
                ["SCORE Act", "Federal/Government", "Government standards for NIL activities"],
                ["House Settlement", "NCAA", "~$20.5M salary cap framework per school"],
            ],
            false,
        )?;

        c.heading("The Confusion", 2)?;
        c.bullet_list(
            [
                "Pay-for-play NIL: Schools pay athletes directly (capped under House Settlement)",
                "Third-party NIL: Brands pay athletes for endorsements (uncapped, legitimate)",
                "Money flows between these pots with no clear boundary",
                "Schools and collectives mask pay-for-play as third-party NIL",
                "No one knows what's allowed anymore",
            ],
            false,
        );

        c.heading("Why This Matters", 2)?;
        c.table(
            &["Stakeholder", "Risk"],
            [
                ["Athletes", "Risk losing eligibility for unknowing violations"],
                ["Schools", "Risk NCAA sanctions and investigation"],
                ["Brands", "Risk association with compliance violations"],
                ["Parents", "Don't know what deals are safe for their child"],
            ],
            false,
        )?;

        c.heading("ChatNIL's Answer", 2)?;
        let accent = c.theme().accent;
        c.banner(
            TextRun::italic(
                "\"We don't solve pay-for-play. We define, document, and enforce what legitimate \
                 third-party NIL looks like.\"",
            )
            .with_size(14.0)
            .with_color(accent),
        );
        c.spacer();
        c.paragraph(
            "Our 6-dimension scoring system creates a clear, auditable standard for what \
             constitutes legitimate third-party NIL. Every deal is scored, documented, and \
             defensible.",
        );
        Ok(())
    })
}

pub(super) fn high_school_students(c: &mut Composer<'_>) -> Result<()> {
    c.section("Section 2: High School Student Experience", |c| {
        c.heading("WHAT", 2)?;
        c.paragraph(
            "The High School Student dashboard is an education-focused experience that prepares \
             young athletes for NIL BEFORE they get to college. We don't help them sign \
             deals—most states restrict or prohibit that anyway. Instead, we teach them the \
             knowledge they'll need when the time comes.",
        );
        topic(
            c,
            "Key Components:",
            &[
                "Discovery Through Conversation: AI-guided learning that asks questions first",
                "4-Pillar Learning Path: Identity, Business, Money, Legacy",
                "State Rules Education: What's allowed in their specific state",
                "Parent Consent Integration: Legal requirement, built in from day one",
                "Badge & Streak Gamification: Motivation to keep learning",
            ],
        );

        c.heading("Dashboard Elements", 3)?;
        components(
            c,
            &[
                ["Journey Progress", "Shows current pillar and completion percentage"],
                ["Continue Conversation", "Primary CTA - resumes AI-guided discovery"],
                ["State Rules Card", "Shows state-specific HS NIL rules"],
                ["Parent Consent Status", "Shows if parent has approved"],
                ["Chapters Grid", "4 pillars with lock/unlock status"],
                ["Badge Collection", "Educational badges earned"],
                ["Streak Tracker", "Daily engagement motivation"],
            ],
        )?;

        c.heading("WHY", 2)?;
        topic(
            c,
            "Why Education First?",
            &[
                "Most states restrict or prohibit HS NIL deals",
                "Athletes need to understand rules BEFORE signing anything",
                "Building knowledge foundation prevents future mistakes",
                "Parents need assurance this is educational, not transactional",
            ],
        );
        topic(
            c,
            "Why Discovery Through Conversation?",
            &[
                "Meets students where they are (conversational, not lecture)",
                "AI asks questions first (not waiting for student to know what to ask)",
                "Collects profile data while teaching (efficient)",
                "Unlocks chapters through engagement (gamified progression)",
            ],
        );
        c.bold_line("Why 4 Pillars?");
        c.table(
            &["Pillar", "Focus", "Why It Matters"],
            [
                ["Identity", "Know yourself", "Before selling yourself, understand what makes you unique"],
                ["Business", "Understand the rules", "Learn the game before playing it"],
                ["Money", "Financial literacy", "Prevents exploitation and surprise tax bills"],
                ["Legacy", "Think long-term", "NIL should build toward something bigger"],
            ],
            true,
        )?;

        c.heading("HOW", 2)?;
        topic(
            c,
            "How Discovery Works:",
            &[
                "Student logs in → AI Coach initiates conversation",
                "AI asks about sport, goals, social media presence",
                "Student answers naturally → System extracts data",
                "After 5 days of conversation → Chapter unlocks",
                "Student can take quiz to earn badges",
                "Progression: Identity → Business → Money → Legacy",
            ],
        );
        topic(
            c,
            "How Parent Consent Works:",
            &[
                "Student signs up → Enters parent email",
                "Parent receives consent request email",
                "Parent clicks link → Creates account or logs in",
                "Parent reviews → Approves or denies",
                "If approved → Student can proceed",
                "If denied → Student sees \"Parent did not approve\"",
            ],
        );
        topic(
            c,
            "What They DON'T See:",
            &[
                "No deal validation (they're not signing deals)",
                "No compliance scoring (not relevant yet)",
                "No brand matching (we're not a marketplace for them)",
                "No messaging (no one to message)",
            ],
        );
        Ok(())
    })
}

pub(super) fn college_athletes(c: &mut Composer<'_>) -> Result<()> {
    c.section("Section 3: College Athlete Experience", |c| {
        c.heading("WHAT", 2)?;
        c.paragraph(
            "The College Athlete dashboard is a compliance-focused experience that helps athletes \
             validate deals and stay eligible. Unlike marketplace platforms, we don't connect them \
             to brands—we help them ensure the deals they find are legitimate and compliant.",
        );
        topic(
            c,
            "Key Components:",
            &[
                "Compliance Status Overview: GREEN/YELLOW/RED at a glance",
                "Deal Validator: 6-dimension scoring system",
                "Active Deals List: All deals sorted by compliance severity",
                "Tax Tracker: YTD earnings and estimated tax obligations",
                "State Rules Reference: State-specific NIL regulations",
            ],
        );

        c.heading("Dashboard Elements", 3)?;
        components(
            c,
            &[
                ["Compliance Status Banner", "Overall GREEN/YELLOW/RED status"],
                ["Validate New Deal", "Primary CTA - opens validation wizard"],
                ["Deals List", "All deals sorted by compliance severity"],
                ["Tax Tracker", "YTD earnings and estimated tax"],
                ["State Rules", "State-specific NIL regulations"],
            ],
        )?;

        c.heading("WHY", 2)?;
        topic(
            c,
            "Why Compliance-Focused (Not Marketplace)?",
            &[
                "Marketplace puts us INSIDE the confusion",
                "Compliance makes us the NEUTRAL ARBITER",
                "Schools will pay for compliance tools",
                "Athletes trust a validator more than a matchmaker",
            ],
        );
        c.bold_line("Why 6-Dimension Scoring?");
        c.paragraph("This is our core patent. Each dimension answers a specific question:");
        c.table(
            &["Dimension", "Weight", "Question It Answers"],
            [
                ["Policy Fit", "30%", "Does this comply with NCAA rules and state law?"],
                ["Document Hygiene", "20%", "Is there a clean contract without red flags?"],
                ["FMV Verification", "15%", "Is the payment market-rate or suspiciously inflated?"],
                ["Tax Readiness", "15%", "Does the athlete understand their tax obligations?"],
                ["Brand Safety", "10%", "Is this an appropriate brand category?"],
                ["Guardian Consent", "10%", "If minor, has parent approved?"],
            ],
            true,
        )?;
        topic(
            c,
            "Score Thresholds:",
            &[
                "🟢 GREEN (80-100): Proceed with confidence",
                "🟡 YELLOW (50-79): Issues exist but fixable",
                "🔴 RED (0-49): Do not proceed - serious compliance risk",
            ],
        );

        c.heading("HOW", 2)?;
        topic(
            c,
            "How Deal Validation Works:",
            &[
                "Athlete clicks \"Validate New Deal\"",
                "Step 1: Enter deal basics (who, what, how much)",
                "Step 2: Answer compliance questions (booster? performance-based?)",
                "Step 3: See compliance score with dimension breakdown",
                "If GREEN → Save and proceed",
                "If YELLOW → See specific issues and fix recommendations",
                "If RED → Do not proceed, serious compliance risk",
            ],
        );
        topic(
            c,
            "Pay-for-Play Red Flags (Auto-Detected):",
            &[
                "Compensation >2x fair market value",
                "Booster or collective involvement",
                "Payment tied to athletic performance (touchdowns, wins)",
                "School or athletic department connection",
                "No clear deliverables or vague requirements",
            ],
        );
        topic(
            c,
            "What They DON'T See:",
            &[
                "No brand discovery (we don't connect them to brands)",
                "No agency matching (we don't play matchmaker)",
                "No campaign invites (no marketplace)",
                "No messaging (no one to message)",
            ],
        );
        Ok(())
    })
}

pub(super) fn parents(c: &mut Composer<'_>) -> Result<()> {
    c.section("Section 4: Parent Experience", |c| {
        c.heading("WHAT", 2)?;
        c.paragraph(
            "The Parent dashboard provides read-only oversight of their child's NIL education \
             journey. Parents can monitor progress, manage consent, and receive \
             notifications—but they don't control the content or make decisions for their child.",
        );
        topic(
            c,
            "Key Components:",
            &[
                "Child Progress Overview: Visual progress tracking",
                "Consent Management: Approve, revoke, or modify consent",
                "Activity Feed: Recent child activities",
                "Notification Settings: Email preferences",
            ],
        );

        c.heading("Dashboard Elements", 3)?;
        components(
            c,
            &[
                ["Child Card", "Shows child's name, school, sport, progress"],
                ["Learning Progress Bar", "Visual completion percentage"],
                ["Current Chapter", "Which pillar child is working on"],
                ["Consent Status", "Approved/Pending/Denied with management"],
                ["Activity Feed", "Recent child activities"],
                ["Notification Settings", "Email preferences"],
            ],
        )?;

        c.heading("WHY", 2)?;
        topic(
            c,
            "Why Read-Only?",
            &[
                "Parents oversee, they don't control",
                "Builds trust without helicopter parenting",
                "Child owns their learning journey",
                "Legal requirement for consent, not content control",
            ],
        );
        topic(
            c,
            "Why Activity Feed?",
            &[
                "Parents want to know their child is engaged",
                "Shows badges earned, quizzes completed",
                "Builds confidence platform is educational",
                "No need to ask child \"what did you learn?\"",
            ],
        );

        c.heading("HOW", 2)?;
        topic(
            c,
            "How Consent Flow Works:",
            &[
                "Child signs up → System requires parent email",
                "Parent receives email: \"[Child] wants to join ChatNIL\"",
                "Email explains: What ChatNIL is, what child will learn, what we DON'T do",
                "Parent clicks \"Approve\" → Creates account, consent recorded",
                "Parent can monitor progress from their dashboard",
                "Parent can revoke consent at any time",
            ],
        );
        topic(
            c,
            "What They DON'T See:",
            &[
                "Child's conversation content (privacy)",
                "Ability to edit child's profile",
                "Ability to submit deals on child's behalf",
                "Any marketplace or deal features",
            ],
        );
        Ok(())
    })
}

pub(super) fn compliance_officers(c: &mut Composer<'_>) -> Result<()> {
    c.section("Section 5: Compliance Officer Experience", |c| {
        c.heading("WHAT", 2)?;
        c.paragraph(
            "The Compliance Officer dashboard provides institutional oversight of all athletes at \
             their school or organization. It's designed for efficiency at scale—finding \
             problems quickly, not browsing paperwork.",
        );
        topic(
            c,
            "Three-Level Navigation:",
            &[
                "Level 1 - Overview Dashboard: Aggregate stats, alerts, deadlines",
                "Level 2 - Athlete List: Paginated, searchable, filterable",
                "Level 3 - Athlete Detail: Individual history, deals, overrides",
            ],
        );

        c.heading("Level 1: Overview Dashboard", 3)?;
        components(
            c,
            &[
                ["Needs Attention List", "Athletes with RED/YELLOW status"],
                ["Deadline Tracker", "NCAA reporting deadlines (5-day rule)"],
                ["Compliance Stats", "GREEN/YELLOW/RED/No Deals counts"],
                ["Sport Breakdown", "Compliance by sport"],
                ["Quick Actions", "Search, Roster, Export buttons"],
            ],
        )?;

        c.heading("Level 2: Athlete List", 3)?;
        components(
            c,
            &[
                ["Search", "Find athletes by name or ID"],
                ["Filters", "Status, sport, deal count"],
                ["Paginated Table", "Handle 1000+ athletes efficiently"],
                ["Bulk Actions", "Mark reviewed, export, message"],
            ],
        )?;

        c.heading("Level 3: Athlete Detail", 3)?;
        components(
            c,
            &[
                ["Compliance Summary", "Overall status and risk level"],
                ["Deals List", "All deals with scores and issues"],
                ["Override Panel", "Manual score adjustment with audit"],
                ["Audit Trail", "Complete action history"],
            ],
        )?;

        c.heading("WHY", 2)?;
        topic(
            c,
            "Why Three Levels?",
            &[
                "Compliance officers don't browse, they find problems",
                "Overview shows what needs attention NOW",
                "List lets them filter to specific concerns",
                "Detail lets them take action on individuals",
            ],
        );
        topic(
            c,
            "Why \"Needs Attention\" First?",
            &[
                "1,000 athletes, maybe 50 have issues",
                "Don't waste time on compliant athletes",
                "Surface problems, not paperwork",
                "RED first, then YELLOW, then GREEN",
            ],
        );
        topic(
            c,
            "Why Deadline Tracker?",
            &[
                "NCAA requires deal disclosure within 5 business days",
                "Missing deadlines = NCAA violation",
                "Proactive alerts prevent compliance failures",
                "Shows deals due in 2 days vs 5 days",
            ],
        );
        topic(
            c,
            "Why Override Capability?",
            &[
                "Algorithms aren't perfect",
                "Compliance officer may have information system doesn't",
                "Example: \"Booster Collective\" name triggers flag, but officer verified it's unaffiliated",
                "All overrides logged for audit trail",
            ],
        );

        c.heading("HOW", 2)?;
        topic(
            c,
            "How Scale is Handled:",
            &[
                "Server-side pagination (never load 1000+ records)",
                "Server-side filtering (database does the work)",
                "Server-side search (fast text search)",
                "Cached aggregates (overview stats refresh every 5 min)",
            ],
        );
        topic(
            c,
            "How Override Works:",
            &[
                "Officer views athlete detail",
                "Selects deal to override",
                "Chooses new status (can only improve, not worsen)",
                "Enters required reason (min 50 characters)",
                "System records override with officer ID and timestamp",
                "Audit trail shows: original score → new score + reason",
            ],
        );
        topic(
            c,
            "How NCAA Export Works:",
            &[
                "Officer clicks \"Generate NCAA Report\"",
                "Selects date range and filters",
                "System generates CSV with required fields",
                "Download for submission to NCAA",
            ],
        );
        c.paragraph(
            "Export includes: Athlete name, sport, ID, deal details, third party info, amount, \
             dates, compliance status, all six dimension scores.",
        );
        topic(
            c,
            "What They DON'T See:",
            &[
                "Athletes at other institutions (data isolation)",
                "Ability to edit athlete profiles",
                "Ability to delete history",
                "Conversation content (athlete privacy)",
                "Marketplace features",
            ],
        );
        Ok(())
    })
}

/// One scoring dimension: what it checks and how points are assigned.
struct Dimension {
    heading: &'static str,
    checks: &'static [&'static str],
    scoring: &'static [&'static str],
}

const DIMENSIONS: [Dimension; 6] = [
    Dimension {
        heading: "Dimension 1: Policy Fit (30%)",
        checks: &[
            "NCAA rules compliance",
            "State law compliance",
            "School-specific policies",
            "Booster/collective involvement flags",
        ],
        scoring: &[
            "100: Fully compliant with all regulations",
            "-40: School-affiliated deal",
            "-50: Booster-connected deal",
            "0: Performance-based compensation (auto-fail)",
        ],
    },
    Dimension {
        heading: "Dimension 2: Document Hygiene (20%)",
        checks: &[
            "Contract present?",
            "Prohibited terms?",
            "Clear deliverables?",
            "Defined duration?",
        ],
        scoring: &[
            "100: Clean contract with all elements",
            "-30: No contract provided",
            "-30: Prohibited term found (per term)",
            "-20: Vague deliverables",
            "-10: No duration specified",
        ],
    },
    Dimension {
        heading: "Dimension 3: FMV Verification (15%)",
        checks: &[
            "Is payment reasonable for this athlete's reach?",
            "Compared to market benchmarks",
            "Variance from expected value",
        ],
        scoring: &[
            "95-100: Within market range",
            "75: 50% above market (minor concern)",
            "50: 100% above market (significant)",
            "20: 200%+ above market (major red flag)",
        ],
    },
    Dimension {
        heading: "Dimension 4: Tax Readiness (15%)",
        checks: &[
            "Has athlete acknowledged tax obligations?",
            "Will they receive 1099?",
            "Quarterly payment awareness",
        ],
        scoring: &[
            "100: Tax obligations acknowledged",
            "-40: Not acknowledged",
            "Additional reminders based on amount",
        ],
    },
    Dimension {
        heading: "Dimension 5: Brand Safety (10%)",
        checks: &[
            "Prohibited categories (alcohol, tobacco, gambling, etc.)",
            "Caution categories (supplements, crypto, etc.)",
            "Brand verification",
        ],
        scoring: &[
            "0: Prohibited category (auto-fail)",
            "-20: Caution category",
            "-15: Unverified third party",
        ],
    },
    Dimension {
        heading: "Dimension 6: Guardian Consent (10%)",
        checks: &["Is athlete a minor?", "Has parent/guardian approved?"],
        scoring: &[
            "100: Adult (N/A) or consent approved",
            "40: Consent pending",
            "0: Consent denied or missing",
        ],
    },
];

pub(super) fn scoring_system(c: &mut Composer<'_>) -> Result<()> {
    c.section("Section 6: The 6-Dimension Scoring System", |c| {
        let accent = c.theme().accent;
        c.styled([TextRun::bold("The Core Patent")
            .with_size(14.0)
            .with_color(accent)]);
        c.paragraph(
            "Our 6-dimension scoring system answers one critical question: \"Is this deal \
             legitimate third-party NIL or disguised pay-for-play?\" Each dimension evaluates a \
             specific aspect of deal legitimacy.",
        );

        for dimension in &DIMENSIONS {
            c.heading(dimension.heading, 2)?;
            topic(c, "What It Checks:", dimension.checks);
            topic(c, "Scoring Logic:", dimension.scoring);
        }

        c.heading("Combined Score Thresholds", 2)?;
        c.table(
            &["Score Range", "Status", "Meaning"],
            [
                ["80-100", "🟢 GREEN", "Legitimate third-party NIL - Proceed with confidence"],
                ["50-79", "🟡 YELLOW", "Concerns to address - Issues exist but fixable"],
                ["0-49", "🔴 RED", "Likely pay-for-play or serious violation - Do not proceed"],
            ],
            true,
        )?;
        Ok(())
    })
}

pub(super) fn why_chatnil(c: &mut Composer<'_>) -> Result<()> {
    c.section("Section 7: Why ChatNIL?", |c| {
        let audiences: [(&str, [&str; 4]); 4] = [
            (
                "For Schools",
                [
                    "Compliance tooling they need NOW, not after regulations settle",
                    "Defensible documentation for NCAA audits and investigations",
                    "Proactive problem identification before violations occur",
                    "Scales to thousands of athletes without additional staff",
                ],
            ),
            (
                "For Athletes",
                [
                    "Know their deals are clean before signing",
                    "Protect their eligibility with documented compliance",
                    "Understand their tax and legal obligations",
                    "Preparation before college (HS students)",
                ],
            ),
            (
                "For Parents",
                [
                    "Assurance the platform is educational, not transactional",
                    "Visibility into child's learning progress",
                    "Control via consent management",
                    "Trust in a platform that prioritizes their child's future",
                ],
            ),
            (
                "For the NCAA/Government",
                [
                    "Clear third-party NIL documentation standards",
                    "Auditable compliance records for investigation",
                    "Neutral enforcement of standards (not a marketplace)",
                    "Supports legitimate NIL while flagging disguised pay-for-play",
                ],
            ),
        ];
        for (audience, points) in audiences {
            c.heading(audience, 2)?;
            c.bullet_list(points, false);
        }

        c.heading("Our Competitive Advantage", 2)?;
        let accent = c.theme().accent;
        c.banner(
            TextRun::bold("\"We're the referee, not a player.\"")
                .with_size(16.0)
                .with_color(accent),
        );
        c.spacer();
        c.bullet_list(
            [
                "We're not trying to make money on deals",
                "We're the referee, not a player in the NIL marketplace",
                "Schools trust us because we're not conflicted",
                "Athletes trust us because we protect them, not profit from them",
                "Our compliance scoring carries weight because we're neutral",
            ],
            false,
        );
        c.spacer();
        c.banner(
            TextRun::bold("ChatNIL: Compliance-First NIL Education")
                .with_size(18.0)
                .with_color(accent),
        );
        Ok(())
    })
}
