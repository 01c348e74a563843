use super::complete_or_placeholder;
use crate::generator::context::GeneratorContext;
use crate::llm::client::PromptPayload;

pub const REFINE_MISSING: &str = "No refined information available.";
pub const REFINE_FAILED: &str = "Error refining Wikipedia data.";

/// 将百科摘要改写为结构化的 Markdown
#[derive(Default)]
pub struct ContentRefiner;

impl ContentRefiner {
    pub fn build_prompt(&self, name: &str, summary: &str) -> String {
        format!(
            r#"
Rewrite the following information about "{name}" in a *well-structured Markdown format*.

*Formatting Guidelines:*
- Use *headings (##, ###) where appropriate*.
- Maintain *line breaks* and *paragraph spacing*.
- Do not use bold.
- Ensure *proper indentation* for readability.

Here is the raw information:
`
{summary}
`

*Now, format and refine the content in Markdown as per the guidelines.*
"#
        )
    }

    pub async fn refine(&self, context: &GeneratorContext, name: &str, summary: &str) -> String {
        tracing::info!("将 {} 的百科数据交给模型重新排版...", name);
        let payload = PromptPayload::user_text(self.build_prompt(name, summary));
        complete_or_placeholder(
            context.model.as_ref(),
            &payload,
            "ContentRefiner",
            REFINE_MISSING,
            REFINE_FAILED,
        )
        .await
    }
}
