//! Static wording of the questionnaire: section definitions, prompts, and the
//! sample fields each section collects.

/// The working formula researchers are told about. Shown as prose only;
/// nothing in this workspace computes it.
pub const INFLUENCE_FORMULA: &str = "Influence = Reach × Salience × Discursiveness";

pub const INTRODUCTION: &str = "Thank you for contributing to this research on the health of \
public spheres in Lebanon and Tunisia. Select your country, submit media samples published \
between January 1 and March 31, 2025, and score each sample's Reach, Salience, and \
Discursiveness with explanations. Go through a few samples per media category, then move \
to the next.";

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub number: &'static str,
    pub title: &'static str,
    /// `true` when the section is answered once per session rather than per sample.
    pub per_session: bool,
    pub definition: &'static str,
    pub prompts: &'static [&'static str],
    /// Wire names of the sample fields this section fills.
    pub fields: &'static [&'static str],
}

pub const SECTIONS: &[Section] = &[
    Section {
        number: "0",
        title: "Salient Issues in Your Context",
        per_session: true,
        definition: "The key public concerns during the study period. They guide the \
                     salience evaluation of every sample.",
        prompts: &[
            "Select your country (Lebanon or Tunisia).",
            "What were the most salient public issues in your country between Jan 1 and \
             Mar 31, 2025? List 5-10 issues.",
            "For each issue, give a few words of explanation or context.",
        ],
        fields: &["country", "publicIssues", "issuesExplanation"],
    },
    Section {
        number: "1",
        title: "Media Sample Submission",
        per_session: false,
        definition: "One pass of the form per media sample.",
        prompts: &[
            "Media category: TV, Radio, Print, Online news, Podcast, Social media, or \
             Other/hybrid.",
            "Name or episode title, platform or outlet, link, and air/publication date.",
            "Is a transcript available? If yes, give a link or notes.",
        ],
        fields: &[
            "mediaCategory",
            "mediaTitle",
            "mediaPlatform",
            "mediaLink",
            "mediaDate",
            "transcriptAvailable",
            "transcriptNotes",
        ],
    },
    Section {
        number: "2",
        title: "Reach",
        per_session: false,
        definition: "The estimated audience size or exposure of the content: how many \
                     people likely saw, heard, or read it.",
        prompts: &[
            "Raw reach: estimated viewers, listeners, likes, views, or impressions.",
            "Basis for this estimate: ratings, view counts, analytics, or judgment.",
            "Normalized reach score (0-1): 1 is one of the highest-reach media in your \
             context, 0 is negligible or unknown reach.",
            "Notes on platform-specific amplification: rebroadcasts, shares, algorithmic \
             boost.",
        ],
        fields: &[
            "rawReach",
            "reachEstimation",
            "reachScore",
            "amplificationNotes",
        ],
    },
    Section {
        number: "3",
        title: "Salience",
        per_session: false,
        definition: "How closely the content aligns with the public concerns listed in \
                     Section 0.",
        prompts: &[
            "Salience score (0-1).",
            "Which of your earlier-listed issues does this sample reflect?",
            "In what way does it engage with those issues? Is the connection central, \
             peripheral, or symbolic?",
        ],
        fields: &["salienceScore", "reflectedIssues", "issueEngagement"],
    },
    Section {
        number: "4",
        title: "Discursiveness",
        per_session: false,
        definition: "The content's potential to change minds, spark critical engagement, \
                     or persuade, assessed through Logos (reason), Pathos (emotion), and \
                     Ethos (credibility).",
        prompts: &[
            "Logos (0-1): does the sample build arguments backed by evidence or causal \
             explanation, and acknowledge other sides?",
            "Pathos (0-1): does it connect emotionally through stories, moral language, or \
             dramatic framing?",
            "Ethos (0-1): does the speaker hold public authority, social trust, or deep \
             experience?",
            "Optional: what makes this sample especially persuasive?",
        ],
        fields: &[
            "logosScore",
            "logosExplanation",
            "pathosScore",
            "pathosExplanation",
            "ethosScore",
            "ethosExplanation",
            "persuasiveNote",
        ],
    },
    Section {
        number: "5",
        title: "Final Prompt",
        per_session: true,
        definition: "Events that may have shaped public opinion during the period.",
        prompts: &[
            "Were there major political, economic, cultural, or foreign policy events \
             between Jan 1 and Mar 31, 2025 that shifted public opinion, even if they were \
             not covered in your samples?",
        ],
        fields: &["finalReflection"],
    },
];
