use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};
use wellness_core::Category;

pub fn wellness_check_prompt(category: Option<Category>) -> GetPromptResult {
    let category_line = match category {
        Some(c) => format!("Use category \"{}\" ({}).", c.label(), c.icon()),
        None => {
            "Ask which category applies (Male or Female); default to Male if unsure.".to_string()
        }
    };
    GetPromptResult::new(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            format!(
                "Run my daily wellness check.\n\nCollect:\n1. Hours of sleep last night (0-12)\n2. Current stress level (0-10)\n3. Minutes of physical activity today (0-120)\n\n{}\n\nThen call calculate_wellness with these values and present the score, status and recommendation exactly as returned.",
                category_line
            ),
        )])
    .with_description("Daily wellness check-in")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_has_single_user_message() {
        let p = wellness_check_prompt(Some(Category::Secondary));
        assert_eq!(p.messages.len(), 1);
        assert!(matches!(p.messages[0].role, PromptMessageRole::User));
        assert_eq!(p.description.as_deref(), Some("Daily wellness check-in"));
    }
}
