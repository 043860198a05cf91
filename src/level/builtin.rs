use super::LevelSpec;
use crate::node::{NodeKind, NodeSpec};

/// The three levels shipped with the game, in play order.
pub(super) fn builtin_levels() -> Vec<LevelSpec> {
    vec![
        LevelSpec::new(
            "Level 1: Basic Data Flow",
            vec![
                NodeSpec::new("set-var", NodeKind::Trigger, "Set Variable", "value: Hello World", "📝"),
                NodeSpec::new("function", NodeKind::Action, "Function", "processData()", "⚡"),
                NodeSpec::new("output", NodeKind::Output, "Output", "format: JSON", "📤"),
            ],
            &["set-var", "function", "output"],
        )
        .with_description("Set a value, process it, and send it to an output."),
        LevelSpec::new(
            "Level 2: Conditional Logic",
            vec![
                NodeSpec::new("form-trigger", NodeKind::Trigger, "On form submission", "form submit", "📋"),
                NodeSpec::new("if-condition", NodeKind::Condition, "If Condition", "Check input", "🔀"),
                NodeSpec::new("send-message", NodeKind::Action, "Send Message", "notify user", "💬"),
                NodeSpec::new("no-operation", NodeKind::Action, "No Operation", "skip", "➡️"),
            ],
            &["form-trigger", "if-condition", "send-message", "no-operation"],
        )
        .with_description("React to a form submission and branch on its input."),
        LevelSpec::new(
            "Level 3: API Integration",
            vec![
                NodeSpec::new("chat-trigger", NodeKind::Trigger, "On chat", "chat message", "💭"),
                NodeSpec::new("ai-agent", NodeKind::Model, "AI Agent", "GPT handler", "🤖"),
                NodeSpec::new("weather", NodeKind::Action, "Get Weather", "OpenWeather API", "🌤️"),
                NodeSpec::new("air-quality", NodeKind::Action, "Air Quality", "AQI API", "🌬️"),
                NodeSpec::new("gmail", NodeKind::Action, "Send Email", "via Gmail", "📧"),
            ],
            &["chat-trigger", "ai-agent", "weather", "air-quality", "gmail"],
        )
        .with_description("Let an agent gather weather and air quality data, then email a report."),
    ]
}
