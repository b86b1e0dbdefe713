use std::sync::Arc;
use tokio::sync::Mutex;

use rmcp::Json;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, GetPromptRequestParams, GetPromptResult, ListPromptsResult,
    ListResourcesResult, PaginatedRequestParam, PaginatedRequestParams, RawResource,
    ReadResourceRequestParam, ReadResourceResult, ResourceContents,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer};
use rmcp::{prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use wellness_core::config::Config;
use wellness_core::{Category, WellnessInputs, recommendations};

pub mod error;
pub mod http;
pub mod notification;
mod prompts;
pub mod services;
pub mod state;
pub mod telemetry;

pub use error::{McpError, McpResult};
pub use services::{CalculateParams, CalculationReport};
pub use state::{FormSession, OptionHighlight, Slider};

pub const RECOMMENDATIONS_URI: &str = "wellness://recommendations";

#[derive(Clone)]
pub struct WellnessMcpHandler {
    form: Arc<Mutex<FormSession>>,
    initial: WellnessInputs,
    tool_router: rmcp::handler::server::tool::ToolRouter<WellnessMcpHandler>,
    prompt_router: rmcp::handler::server::router::prompt::PromptRouter<WellnessMcpHandler>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SliderParams {
    /// One of sleep_hours, stress_level, activity_minutes
    pub slider: Slider,
    pub value: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SelectCategoryParams {
    /// "Primary"/"Male" or "Secondary"/"Female"; anything else selects Primary
    pub category: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SliderResult {
    pub slider: Slider,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SelectionResult {
    pub selected: Category,
    pub changed: bool,
    pub highlight: Vec<OptionHighlight>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct FormView {
    pub sleep_hours: f64,
    pub sleep_hours_label: String,
    pub stress_level: f64,
    pub stress_level_label: String,
    pub activity_minutes: f64,
    pub activity_minutes_label: String,
    pub selected: Category,
    pub selected_label: String,
}

impl FormView {
    fn of(form: &FormSession) -> Self {
        Self {
            sleep_hours: form.value(Slider::SleepHours),
            sleep_hours_label: form.slider_label(Slider::SleepHours),
            stress_level: form.value(Slider::StressLevel),
            stress_level_label: form.slider_label(Slider::StressLevel),
            activity_minutes: form.value(Slider::ActivityMinutes),
            activity_minutes_label: form.slider_label(Slider::ActivityMinutes),
            selected: form.selected(),
            selected_label: format!("{} {}", form.selected().label(), form.selected().icon()),
        }
    }
}

// === Prompt Parameters ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WellnessCheckParams {
    pub category: Option<String>,
}

#[tool_router]
#[prompt_router]
impl WellnessMcpHandler {
    pub fn new(config: &Config) -> Self {
        Self {
            form: Arc::new(Mutex::new(FormSession::new(config.initial))),
            initial: config.initial,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_router.list_all().len()
    }

    pub async fn form_view(&self) -> FormView {
        FormView::of(&*self.form.lock().await)
    }

    #[tool(
        name = "calculate_wellness",
        description = "Score sleep hours, stress level and activity minutes for a category and return status plus recommendation"
    )]
    async fn calculate_wellness(
        &self,
        params: Parameters<CalculateParams>,
    ) -> Result<Json<CalculationReport>, String> {
        let report = services::calculate(params.0.into_inputs())?;
        Ok(Json(report))
    }

    #[tool(name = "get_form", description = "Current slider values and category selection")]
    async fn get_form(&self) -> Result<Json<FormView>, String> {
        Ok(Json(self.form_view().await))
    }

    #[tool(name = "set_slider", description = "Move one slider; the value is clamped to its range")]
    async fn set_slider(&self, params: Parameters<SliderParams>) -> Result<Json<SliderResult>, String> {
        let p = params.0;
        let mut form = self.form.lock().await;
        let value = form
            .set_slider(p.slider, p.value)
            .map_err(|e| McpError::from(e).to_string())?;
        tracing::debug!(slider = ?p.slider, value, "slider moved");
        Ok(Json(SliderResult {
            slider: p.slider,
            value,
            label: form.slider_label(p.slider),
        }))
    }

    #[tool(name = "select_category", description = "Select the Primary (Male) or Secondary (Female) option")]
    async fn select_category(
        &self,
        params: Parameters<SelectCategoryParams>,
    ) -> Result<Json<SelectionResult>, String> {
        let category = Category::parse_lenient(&params.0.category);
        let mut form = self.form.lock().await;
        let changed = form.select(category);
        if changed {
            tracing::debug!(%category, "category selected");
        }
        Ok(Json(SelectionResult {
            selected: form.selected(),
            changed,
            highlight: form.highlight(),
        }))
    }

    #[tool(
        name = "calculate_form",
        description = "Calculate the wellness score from the current form values"
    )]
    async fn calculate_form(&self) -> Result<Json<CalculationReport>, String> {
        let inputs = self.form.lock().await.inputs();
        let report = services::calculate(inputs)?;
        Ok(Json(report))
    }

    #[tool(name = "reset_form", description = "Restore the form to its starting values")]
    async fn reset_form(&self) -> Result<Json<FormView>, String> {
        let mut form = self.form.lock().await;
        *form = FormSession::new(self.initial);
        Ok(Json(FormView::of(&form)))
    }

    // === MCP Prompts ===

    /// Guided daily check-in that ends in a calculate_wellness call
    #[prompt(
        name = "wellness-check",
        description = "Collect today's sleep, stress and activity and compute a wellness score"
    )]
    async fn wellness_check(&self, params: Parameters<WellnessCheckParams>) -> GetPromptResult {
        let category = params.0.category.as_deref().map(Category::parse_lenient);
        prompts::wellness_check_prompt(category)
    }
}

fn recommendations_document() -> serde_json::Value {
    serde_json::json!({
        "recommendations": recommendations::table_json(),
        "thresholds": { "Excellent": 80, "Good": 60, "Fair": 40, "Poor": 0 },
        "formula": "sleep_hours*8 - stress_level*5 + activity_minutes*0.5, clamped to 0..100, ties round to even",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })
}

fn resource_list() -> ListResourcesResult {
    let resource = RawResource::new(RECOMMENDATIONS_URI, "Recommendation Table");

    let mut res = resource.no_annotation();
    res.description =
        Some("Recommendation text for every status and category, with score thresholds".to_string());
    res.mime_type = Some("application/json".to_string());

    ListResourcesResult {
        resources: vec![res],
        next_cursor: None,
        meta: None,
    }
}

fn read_resource_uri(uri: &str) -> Result<ReadResourceResult, ErrorData> {
    if uri != RECOMMENDATIONS_URI {
        return Err(ErrorData::invalid_params(
            format!("Unknown resource URI: {}", uri),
            None,
        ));
    }
    let text = serde_json::to_string_pretty(&recommendations_document())
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(ReadResourceResult::new(vec![
        ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some("application/json".to_string()),
            text,
            meta: None,
        },
    ]))
}

#[tool_handler]
#[prompt_handler(router = self.prompt_router)]
impl rmcp::ServerHandler for WellnessMcpHandler {
    // === Server Info & Capabilities ===
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(
            rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
        )
        .with_instructions(
            "Wellness calculator - scores sleep, stress and activity into a status \
             and a category-specific recommendation.",
        )
    }

    // === MCP Resource Implementation ===

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(resource_list())
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        read_resource_uri(&request.uri)
    }
}
