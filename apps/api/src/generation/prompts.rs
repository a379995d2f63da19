// All LLM prompt constants for the three AI tasks.
// Both the app surface and the function surface render their messages here.

use crate::generation::models::{PostGeneratorInput, ProfileOptimizerInput};

/// System prompt for post generation.
pub const POST_GENERATOR_SYSTEM: &str = r#"You are a professional LinkedIn content writer that produces human-like posts optimized for engagement and authenticity.

Your posts MUST:
1. Sound human and natural, NOT robotic or AI-generated
2. Use short, punchy sentences mixed with longer ones
3. Start with a compelling hook (question, bold statement, or story)
4. Include subtle storytelling elements
5. Use white space and line breaks for readability
6. Avoid emoji overload (max 3-4 per post, placed strategically)
7. Include a clear but natural call-to-action
8. Be between 150-300 words for optimal engagement

AVOID these AI writing patterns:
- "I'm thrilled to announce..."
- "Excited to share..."
- "Humbled and honored..."
- "Game-changer"
- "Leverage"
- "Synergy"
- "At the end of the day"
- Starting every sentence the same way
- Excessive exclamation marks
- Generic corporate speak

Write like a real person sharing genuine thoughts and experiences."#;

/// Post generation prompt template.
/// Replace: {project_name}, {tech_stack}, {features}, {purpose}, {purpose_guidance},
///          {tone}, {tone_guidance}
pub const POST_GENERATOR_TEMPLATE: &str = r#"Create 3 LinkedIn post variations for this project:

Project Name: {project_name}
Tech Stack: {tech_stack}
Key Features: {features}
Purpose: {purpose} - {purpose_guidance}
Tone: {tone} - {tone_guidance}

Return a JSON object with:
- posts: Array of 3 different post variations (each 150-300 words)
- hookSuggestions: Array of 3-4 alternative hook ideas
- hashtags: Array of 5-8 relevant hashtags (include the # symbol)
- ctaSuggestions: Array of 3 call-to-action options
- bestPostingTime: Recommendation for best posting time

Each post should have a different angle or approach while maintaining the core message."#;

/// System prompt for post analysis.
pub const POST_ANALYZER_SYSTEM: &str = r#"You are a LinkedIn content analyst that helps improve posts for better engagement.

You analyze LinkedIn posts and provide:
1. Engagement score (1-10) based on hook strength, readability, value, and CTA
2. Improved version of the post
3. Specific hook improvement suggestions
4. Formatting and structure tips

Scoring criteria:
- Hook strength (0-3 points): Does it stop the scroll?
- Value delivery (0-3 points): Does reader learn something?
- Readability (0-2 points): Is it scannable with good formatting?
- Call-to-action (0-2 points): Does it encourage engagement?

Be specific and actionable in your feedback. Don't give generic advice."#;

/// Post analysis prompt template. Replace `{post}` before sending.
pub const POST_ANALYZER_TEMPLATE: &str = r#"Analyze this LinkedIn post and provide improvements:

---
{post}
---

Return a JSON object with:
- improvedVersion: A rewritten version that would perform better (keep similar length and core message)
- engagementScore: Number 1-10 based on the scoring criteria
- hookImprovements: Array of 3-4 specific suggestions to improve the opening hook
- formattingTips: Array of 3-4 specific formatting and structure improvements
- overallFeedback: 2-3 sentences summarizing the main issues and strengths

Be specific to THIS post. Reference actual content from the post in your feedback."#;

/// System prompt for profile optimization.
pub const PROFILE_OPTIMIZER_SYSTEM: &str = r#"You are a LinkedIn profile optimization expert focused on recruiter attraction, keyword optimization, and natural professional tone.

Your task is to optimize LinkedIn profiles to:
1. Attract recruiters and hiring managers
2. Include relevant industry keywords for better searchability
3. Sound professional yet authentic and human
4. Highlight achievements and value proposition clearly
5. Use action verbs and quantifiable results where possible

Guidelines:
- Keep headlines under 120 characters but impactful
- About sections should be 2000 characters max, using short paragraphs
- Avoid buzzwords like "guru", "ninja", "rockstar"
- Focus on value delivered, not just responsibilities
- Use first person for about section to feel personal
- Include a clear call-to-action at the end of about section"#;

/// Profile optimization prompt template.
/// Replace: {headline}, {about}, {skills}, {experience}
pub const PROFILE_OPTIMIZER_TEMPLATE: &str = r#"Please optimize this LinkedIn profile:

Current Headline: {headline}

Current About Section: {about}

Skills: {skills}

Experience: {experience}

Return a JSON object with these fields:
- optimizedHeadline: Improved headline (max 120 chars)
- optimizedAbout: Improved about section (max 2000 chars, use short paragraphs)
- suggestedSkills: Array of 5-8 relevant skills to add
- keywordSuggestions: Array of 5-8 industry keywords to incorporate
- recruiterSummary: A 2-3 sentence summary optimized for recruiters"#;

/// Voice requested for generated posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Storytelling,
    Motivational,
    Casual,
    Technical,
}

impl Tone {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "professional" => Some(Tone::Professional),
            "storytelling" => Some(Tone::Storytelling),
            "motivational" => Some(Tone::Motivational),
            "casual" => Some(Tone::Casual),
            "technical" => Some(Tone::Technical),
            _ => None,
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            Tone::Professional => "Maintain a polished, confident tone while staying approachable",
            Tone::Storytelling => {
                "Frame the content as a journey or narrative with clear beginning, middle, end"
            }
            Tone::Motivational => "Inspire action and connection while avoiding clichés",
            Tone::Casual => {
                "Be conversational and relatable, like talking to a colleague over coffee"
            }
            Tone::Technical => {
                "Share technical details in an accessible way, showing expertise without jargon overload"
            }
        }
    }
}

/// What the post is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Purpose {
    #[default]
    Announcement,
    JobSearch,
    PersonalBrand,
    ThoughtLeadership,
    Milestone,
}

impl Purpose {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "announcement" => Some(Purpose::Announcement),
            "job_search" => Some(Purpose::JobSearch),
            "personal_brand" => Some(Purpose::PersonalBrand),
            "thought_leadership" => Some(Purpose::ThoughtLeadership),
            "milestone" => Some(Purpose::Milestone),
            _ => None,
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            Purpose::Announcement => "Focus on the impact and value, not just the news",
            Purpose::JobSearch => "Highlight skills and openness without sounding desperate",
            Purpose::PersonalBrand => "Establish expertise and unique perspective",
            Purpose::ThoughtLeadership => "Share insights that challenge conventional thinking",
            Purpose::Milestone => "Celebrate authentically while providing value to readers",
        }
    }
}

/// Fills `{name}` slots in one left-to-right pass. Inserted values are never
/// scanned again, and braces that do not name a known slot are kept verbatim.
fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let slot = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match slot {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// `value` unless it is blank, in which case `placeholder`.
fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Renders the post generation user message.
///
/// The raw purpose/tone keys are echoed as given; unknown keys still get the
/// default guidance text.
pub fn post_generator_message(input: &PostGeneratorInput) -> String {
    let purpose = Purpose::from_key(&input.purpose).unwrap_or_default();
    let tone = Tone::from_key(&input.tone).unwrap_or_default();

    render_template(
        POST_GENERATOR_TEMPLATE,
        &[
            (
                "project_name",
                or_placeholder(&input.project_name, "Personal Project"),
            ),
            ("tech_stack", or_placeholder(&input.tech_stack, "Not specified")),
            ("features", or_placeholder(&input.features, "Not specified")),
            ("purpose", or_placeholder(&input.purpose, "announcement")),
            ("purpose_guidance", purpose.guidance()),
            ("tone", or_placeholder(&input.tone, "professional")),
            ("tone_guidance", tone.guidance()),
        ],
    )
}

/// Renders the post analysis user message.
pub fn post_analyzer_message(post: &str) -> String {
    render_template(POST_ANALYZER_TEMPLATE, &[("post", post)])
}

/// Renders the profile optimization user message.
pub fn profile_optimizer_message(input: &ProfileOptimizerInput) -> String {
    render_template(
        PROFILE_OPTIMIZER_TEMPLATE,
        &[
            ("headline", or_placeholder(&input.headline, "Not provided")),
            ("about", or_placeholder(&input.about, "Not provided")),
            ("skills", or_placeholder(&input.skills, "Not provided")),
            ("experience", or_placeholder(&input.experience, "Not provided")),
        ],
    )
}
