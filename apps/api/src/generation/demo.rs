//! Demo-mode output: deterministic templated results used whenever the live
//! model call is unavailable or unusable.
//!
//! Pure functions of their input: no randomness, no I/O.

use crate::generation::hashtags::project_hashtag;
use crate::generation::models::{
    PostAnalyzerResult, PostGeneratorInput, PostGeneratorResult, ProfileOptimizerInput,
    ProfileOptimizerResult, MAX_SCORE, MIN_SCORE,
};

const BEST_POSTING_TIME: &str = "Tuesday to Thursday, 8:00-10:00 AM your local time. \
    LinkedIn engagement peaks mid-week mornings when professionals are starting their day.";

/// Max characters of the opening line quoted back in hook feedback.
const QUOTED_OPENING_CHARS: usize = 80;

/// Max skills in a demo profile suggestion.
const SUGGESTED_SKILLS_LIMIT: usize = 8;

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// First comma-separated item of `list`, trimmed, or `default` if blank.
fn first_item<'a>(list: &'a str, default: &'a str) -> &'a str {
    or_default(list.split(',').next().unwrap_or(""), default)
}

// ────────────────────────────────────────────────────────────────────────────
// Post generation
// ────────────────────────────────────────────────────────────────────────────

/// Three pre-written posts with the project fields substituted.
pub fn demo_posts(input: &PostGeneratorInput) -> PostGeneratorResult {
    let name = or_default(&input.project_name, "My Project");
    let stack = or_default(&input.tech_stack, "modern technologies");
    let features = or_default(&input.features, "innovative features");

    let origin_feature = first_item(features, "existing solutions");
    let core_feature = first_item(features, "the core functionality");
    let main_feature = first_item(features, "The main feature");
    let hook_topic = first_item(features, "technology");
    let main_tech = first_item(stack, "tech");

    let posts = vec![
        format!(
            "We spent 3 months building something we actually needed.\n\n\
             No venture funding. No 50-person team. Just a real problem that kept us up at night.\n\n\
             {name} started as a weekend hack. We were frustrated with how {origin_feature} worked — or didn't.\n\n\
             So we built our own. Using {stack}.\n\n\
             Here's the thing nobody tells you about building in public:\n\n\
             → Your first version will embarrass you\n\
             → Users don't care about your tech stack\n\
             → Speed beats perfection every single time\n\
             → The best feedback comes from the harshest critics\n\n\
             After dozens of iterations, {name} now helps real people solve real problems.\n\n\
             The biggest lesson? Stop building features nobody asked for. Talk to your users first.\n\n\
             What's a project you built that started as a \"quick hack\"? 👇"
        ),
        format!(
            "\"That's impossible to build.\"\n\n\
             That's what I heard when I pitched {name} to my team.\n\n\
             6 months later, it's live and growing.\n\n\
             The secret wasn't some revolutionary technology. It was stubbornness.\n\n\
             We chose {stack} because it let us move fast without sacrificing quality. \
             Every feature — from {core_feature} to the polish — was driven by actual user feedback.\n\n\
             Here's what I learned building {name}:\n\n\
             1. Start with the ugliest MVP possible\n\
             2. Ship weekly, not monthly\n\
             3. Your users know more than your product roadmap\n\
             4. Technical debt is fine if you know where it lives\n\
             5. Celebrate small wins — they compound\n\n\
             The tech industry has a habit of overcomplicating things. Sometimes the best solution is the simplest one.\n\n\
             Building something right now? I'd love to hear about it. Drop a comment or send me a message 🚀"
        ),
        format!(
            "Everyone talks about the launch.\n\n\
             Nobody talks about the 47 failed deployments before it.\n\n\
             We just shipped {name} and I want to be honest about the journey.\n\n\
             {main_feature} took 3 complete rewrites. Our {main_tech} setup broke twice in production. \
             We almost gave up in month 2.\n\n\
             But here we are.\n\n\
             What kept us going was a simple question: \"Would I use this myself?\"\n\n\
             Every time the answer was \"not yet,\" we went back to the drawing board.\n\n\
             The result? Something we're genuinely proud of. Not because it's perfect — it's far from it — \
             but because it solves a real problem in a way that feels right.\n\n\
             Three things I wish someone told me earlier:\n\n\
             • Perfect is the enemy of shipped\n\
             • Your first 10 users matter more than your next 10,000\n\
             • Building alone is faster. Building with others is better.\n\n\
             If you're in the trenches right now, keep going. The breakthrough is closer than you think. 💪"
        ),
    ];

    PostGeneratorResult {
        posts,
        hook_suggestions: vec![
            "\"I almost deleted the entire codebase last Tuesday.\" — Start with a vulnerable moment"
                .to_string(),
            format!(
                "\"What if I told you {name} was built in just 3 months?\" — Lead with an impressive stat"
            ),
            format!(
                "\"Stop scrolling. This might change how you think about {hook_topic}.\" — Direct pattern interrupt"
            ),
            "Share a specific failure moment that led to a breakthrough — authenticity hooks"
                .to_string(),
        ],
        hashtags: vec![
            "#buildinpublic".to_string(),
            "#startup".to_string(),
            project_hashtag(&input.project_name),
            "#softwaredevelopment".to_string(),
            "#techstartup".to_string(),
            "#innovation".to_string(),
            "#productdevelopment".to_string(),
            "#entrepreneurship".to_string(),
        ],
        cta_suggestions: vec![
            "\"What's a project you almost gave up on? I'd love to hear your story below 👇\""
                .to_string(),
            format!(
                "\"Follow me for more behind-the-scenes of building {name}. DMs are always open.\""
            ),
            format!("\"Try {name} yourself and let me know what you think — link in comments.\""),
        ],
        best_posting_time: BEST_POSTING_TIME.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Post analysis
// ────────────────────────────────────────────────────────────────────────────

/// Textual signals the heuristic score is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSignals {
    pub word_count: usize,
    pub has_hook: bool,
    pub has_emoji: bool,
    pub has_line_breaks: bool,
}

impl PostSignals {
    pub fn from_text(post: &str) -> Self {
        Self {
            word_count: whitespace_token_count(post),
            has_hook: opens_with_hook(post),
            has_emoji: post.chars().any(is_pictograph),
            has_line_breaks: post.matches("\n\n").count() >= 2,
        }
    }

    /// Base 5; +1 hook, +0.5 emoji, +1 paragraph breaks, +1 for 101..=299
    /// words, −1 under 50 words. Rounded half up, clamped to 1..=10.
    ///
    /// Tracked in half points so the rounding is exact.
    pub fn score(&self) -> u8 {
        let mut half_points: i32 = 10;
        if self.has_hook {
            half_points += 2;
        }
        if self.has_emoji {
            half_points += 1;
        }
        if self.has_line_breaks {
            half_points += 2;
        }
        if self.word_count > 100 && self.word_count < 300 {
            half_points += 2;
        }
        if self.word_count < 50 {
            half_points -= 2;
        }
        let rounded = (half_points + 1).div_euclid(2);
        rounded.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
    }
}

/// Pieces left after splitting on whitespace runs, counting the empty pieces
/// before leading and after trailing whitespace. `""` is one piece.
fn whitespace_token_count(post: &str) -> usize {
    let mut count = 1;
    let mut in_run = false;
    for c in post.chars() {
        if c.is_whitespace() {
            if !in_run {
                count += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    count
}

/// Opening quote, opening `?`, or a capitalised first line that asks a question.
fn opens_with_hook(post: &str) -> bool {
    let trimmed = post.trim();
    if trimmed.starts_with(['"', '\u{201C}', '\u{201D}', '?']) {
        return true;
    }
    let first_line = trimmed.lines().next().unwrap_or("");
    match first_line.chars().next() {
        Some(c) if c.is_ascii_uppercase() => first_line[1..].contains('?'),
        _ => false,
    }
}

/// Misc symbols & pictographs through symbols & pictographs extended-A.
fn is_pictograph(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c)
}

/// Heuristic critique of `post`.
pub fn demo_analysis(post: &str) -> PostAnalyzerResult {
    let signals = PostSignals::from_text(post);
    let score = signals.score();

    let first_line: String = post
        .split('\n')
        .next()
        .unwrap_or("")
        .chars()
        .take(QUOTED_OPENING_CHARS)
        .collect();
    let opening = post.split('\n').take(3).collect::<Vec<_>>().join("\n");

    let improved_version = format!(
        "Here's what most people get wrong about this topic.\n\n\
         {opening}\n\n\
         The key insight? It's not about doing more — it's about doing the right things consistently.\n\n\
         Three takeaways:\n\
         → Start with the problem, not the solution\n\
         → Keep your message focused on one core idea\n\
         → End with a question that invites genuine conversation\n\n\
         What's your experience with this? I'd love to hear different perspectives 👇"
    );

    let spacing_tip = if signals.has_line_breaks {
        "Good use of white space!"
    } else {
        "Add more line breaks — LinkedIn rewards scannable content. Use single-line paragraphs."
    };
    let length_tip = if signals.word_count < 100 {
        "Your post is quite short. Aim for 150-250 words for optimal engagement."
    } else if signals.word_count > 300 {
        "Consider trimming — posts over 300 words see diminishing engagement."
    } else {
        "Good length! 150-250 words hits the sweet spot."
    };
    let emoji_tip = if signals.has_emoji {
        "Emoji usage looks good — just make sure they add meaning, not just decoration."
    } else {
        "Consider adding 1-2 strategic emojis to break up text and add visual interest."
    };

    let potential = if score >= 7 {
        "strong"
    } else if score >= 5 {
        "decent"
    } else {
        "room for improvement in"
    };
    let hook_note = if signals.has_hook {
        "The hook is attention-grabbing."
    } else {
        "The opening could be more compelling to stop the scroll."
    };
    let format_note = if signals.has_line_breaks {
        "The formatting makes it easy to scan."
    } else {
        "Better formatting with more white space would improve readability."
    };

    PostAnalyzerResult {
        improved_version,
        engagement_score: score,
        hook_improvements: vec![
            format!(
                "Your opening \"{first_line}...\" could be stronger. Try starting with a bold statement or unexpected question"
            ),
            "Consider leading with a specific number or statistic to grab attention immediately"
                .to_string(),
            "Personal stories outperform generic openings 3:1 on LinkedIn — try \"Last week I...\" or \"I used to think...\""
                .to_string(),
            "Pattern interrupts work well — try \"Stop.\" or \"Unpopular opinion:\" to break the scroll"
                .to_string(),
        ],
        formatting_tips: vec![
            spacing_tip.to_string(),
            length_tip.to_string(),
            "Use → or • for list items instead of numbers — they're more visually appealing on LinkedIn"
                .to_string(),
            emoji_tip.to_string(),
        ],
        overall_feedback: format!(
            "This post has {potential} engagement potential. {hook_note} {format_note} \
             Focus on adding a clear call-to-action at the end to boost comments."
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile optimization
// ────────────────────────────────────────────────────────────────────────────

pub fn demo_profile(input: &ProfileOptimizerInput) -> ProfileOptimizerResult {
    let listed: Vec<&str> = input
        .skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let skills = if listed.is_empty() {
        vec!["Software Development"]
    } else {
        listed
    };
    // non-empty from here on
    let primary = skills[0];
    let top_skills = skills.iter().take(3).copied().collect::<Vec<_>>().join(", ");

    let experience = input.experience.trim();
    let headline_experience = or_default(experience, "5+ years");
    let about_experience = or_default(experience, "several years");
    let summary_experience = or_default(experience, "extensive");

    let suggested_skills = skills
        .iter()
        .take(3)
        .copied()
        .chain([
            "System Design",
            "Technical Leadership",
            "Agile Methodologies",
            "Cross-functional Collaboration",
            "Problem Solving",
        ])
        .take(SUGGESTED_SKILLS_LIMIT)
        .map(str::to_string)
        .collect();

    ProfileOptimizerResult {
        optimized_headline: format!(
            "{primary} Expert | Building scalable solutions | {headline_experience} driving measurable impact"
        ),
        optimized_about: format!(
            "I solve complex problems with elegant solutions.\n\n\
             Over {about_experience}, I've helped teams ship products that users actually love. \
             My focus is on {top_skills} — not just writing code, but building systems that scale.\n\n\
             What I bring to the table:\n\
             → Deep expertise in {primary} with hands-on production experience\n\
             → Track record of delivering projects on time and within scope\n\
             → Strong communicator who bridges the gap between technical and business teams\n\n\
             I believe the best technology is invisible — it just works. That philosophy drives everything I build.\n\n\
             Currently open to interesting challenges where I can make a real impact. \
             If you're building something meaningful, let's talk.\n\n\
             📩 Feel free to reach out — I respond to every message."
        ),
        suggested_skills,
        keyword_suggestions: [
            primary,
            "Full Stack Development",
            "Software Architecture",
            "Cloud Infrastructure",
            "CI/CD",
            "Team Leadership",
            "Product Development",
            "Scalable Systems",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        recruiter_summary: format!(
            "Results-driven {primary} professional with {summary_experience} experience building scalable applications. \
             Proven ability to lead cross-functional teams and deliver high-impact projects. \
             Strong technical foundation combined with excellent communication skills makes them \
             an ideal candidate for senior engineering and leadership roles."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::models::{ResultShape, POST_VARIANTS};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn civic_ai() -> PostGeneratorInput {
        PostGeneratorInput {
            project_name: "Civic AI".into(),
            tech_stack: "React, Python".into(),
            features: "citizen engagement".into(),
            purpose: "announcement".into(),
            tone: "professional".into(),
        }
    }

    #[test]
    fn test_demo_posts_substitutes_project_everywhere() {
        let result = demo_posts(&civic_ai());
        assert_eq!(result.posts.len(), POST_VARIANTS);
        for post in &result.posts {
            assert!(post.contains("Civic AI"), "missing name in: {post}");
        }
        assert!(result.hashtags.contains(&"#CivicAI".to_string()));
        assert!(result.posts[0].contains("how citizen engagement worked"));
        assert!(result.posts[2].contains("Our React setup"));
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_demo_posts_always_three_for_blank_input() {
        let blank = PostGeneratorInput::default();
        let result = demo_posts(&blank);
        assert_eq!(result.posts.len(), POST_VARIANTS);
        assert!(result.posts[0].contains("My Project"));
        assert!(result.posts[0].contains("Using modern technologies."));
        assert!(result.hashtags.contains(&"#project".to_string()));
        assert_eq!(result.hashtags.len(), 8);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_demo_posts_uses_first_feature_only() {
        let input = PostGeneratorInput {
            project_name: "Atlas".into(),
            features: " offline sync , dark mode".into(),
            ..Default::default()
        };
        let result = demo_posts(&input);
        assert!(result.posts[1].contains("from offline sync to the polish"));
        assert!(!result.posts[1].contains("dark mode"));
    }

    #[test]
    fn test_demo_posts_is_deterministic() {
        assert_eq!(demo_posts(&civic_ai()), demo_posts(&civic_ai()));
    }

    #[test]
    fn test_word_count_keeps_edge_pieces() {
        assert_eq!(whitespace_token_count(""), 1);
        assert_eq!(whitespace_token_count("one two"), 2);
        assert_eq!(whitespace_token_count("one \t\n two"), 2);
        assert_eq!(whitespace_token_count(" one two\n"), 4);
    }

    #[test]
    fn test_pasted_post_with_trailing_newline_reaches_fifty() {
        let post = format!("{}\n", words(49));
        let signals = PostSignals::from_text(&post);
        assert_eq!(signals.word_count, 50);
        assert_eq!(signals.score(), 5);
        assert_eq!(PostSignals::from_text(&words(49)).score(), 4);
    }

    #[test]
    fn test_score_empty_post() {
        // One empty piece: 5 - 1
        assert_eq!(PostSignals::from_text("").score(), 4);
        assert_eq!(demo_analysis("").engagement_score, 4);
    }

    #[test]
    fn test_score_bounds_for_varied_inputs() {
        let long_post = format!("Why?\n\n{}\n\n{} 🚀", words(150), words(20));
        let samples = [
            String::new(),
            " ".to_string(),
            "\n\n\n\n".to_string(),
            "?".to_string(),
            words(1000),
            long_post,
            "ünïcödé 日本語 🎉🎉🎉".to_string(),
        ];
        for sample in &samples {
            let score = PostSignals::from_text(sample).score();
            assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "{score} for {sample:?}");
        }
    }

    #[test]
    fn test_score_all_signals() {
        // 5 + 1 + 0.5 + 1 + 1 = 8.5 -> 9
        let post = format!("Is this the hook?\n\n{}\n\n{} 🚀", words(100), words(50));
        let signals = PostSignals::from_text(&post);
        assert!(signals.has_hook);
        assert!(signals.has_emoji);
        assert!(signals.has_line_breaks);
        assert_eq!(signals.score(), 9);
    }

    #[test]
    fn test_score_half_point_rounds_up() {
        // 5 - 1 + 0.5 = 4.5 -> 5
        let signals = PostSignals::from_text("short 🎉");
        assert!(signals.has_emoji);
        assert_eq!(signals.score(), 5);
    }

    #[test]
    fn test_hook_detection() {
        assert!(opens_with_hook("\"Quote first\" then text"));
        assert!(opens_with_hook("\u{201C}Curly quote\u{201D}"));
        assert!(opens_with_hook("  ?leading question mark"));
        assert!(opens_with_hook("Ever wondered why?\nrest"));
        assert!(!opens_with_hook("Plain statement.\nIs this a question?"));
        assert!(!opens_with_hook("lowercase question?"));
        assert!(!opens_with_hook(""));
    }

    #[test]
    fn test_line_breaks_need_two_blank_lines() {
        assert!(!PostSignals::from_text("a\n\nb").has_line_breaks);
        assert!(PostSignals::from_text("a\n\nb\n\nc").has_line_breaks);
    }

    #[test]
    fn test_demo_analysis_quotes_opening_line() {
        let long_opening = "A".repeat(120);
        let post = format!("{long_opening}\nsecond line");
        let result = demo_analysis(&post);
        let expected = format!("Your opening \"{}...\"", "A".repeat(80));
        assert!(result.hook_improvements[0].starts_with(&expected));
        assert!(result.improved_version.contains("second line"));
        assert_eq!(result.formatting_tips.len(), 4);
    }

    #[test]
    fn test_demo_analysis_feedback_tracks_score() {
        let weak = demo_analysis("meh");
        assert!(weak.overall_feedback.contains("room for improvement in"));

        let post = format!("Is this the hook?\n\n{}\n\n{} 🚀", words(100), words(50));
        let strong = demo_analysis(&post);
        assert!(strong.overall_feedback.starts_with("This post has strong"));
        assert_eq!(strong.formatting_tips[0], "Good use of white space!");
    }

    #[test]
    fn test_demo_profile_uses_primary_skill() {
        let input = ProfileOptimizerInput {
            headline: "Engineer".into(),
            about: String::new(),
            skills: "Rust, Go , , Kubernetes, SQL".into(),
            experience: "8 years".into(),
        };
        let result = demo_profile(&input);
        assert!(result.optimized_headline.starts_with("Rust Expert"));
        assert!(result.optimized_headline.contains("8 years driving"));
        assert!(result.optimized_about.contains("My focus is on Rust, Go, Kubernetes"));
        assert_eq!(result.suggested_skills.len(), SUGGESTED_SKILLS_LIMIT);
        assert_eq!(&result.suggested_skills[..3], &["Rust", "Go", "Kubernetes"]);
        assert_eq!(result.keyword_suggestions[0], "Rust");
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_demo_profile_blank_input() {
        let result = demo_profile(&ProfileOptimizerInput::default());
        assert!(result.optimized_headline.starts_with("Software Development Expert"));
        assert!(result.optimized_headline.contains("5+ years"));
        assert!(result.recruiter_summary.contains("with extensive experience"));
        assert_eq!(result.suggested_skills.len(), 6);
        assert!(result.validate().is_ok());
    }
}
