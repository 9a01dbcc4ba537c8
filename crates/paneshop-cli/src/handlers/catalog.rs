use crate::context::ExecutionContext;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::presentation::view_models::{CatalogViewModel, CommandResultViewModel, Guidance};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let catalog = ctx.catalog();
    let view = CatalogViewModel::from_catalog(&catalog);

    let mut result = CommandResultViewModel::new(view);
    if let Some(first) = catalog.products().first() {
        result = result.with_suggestion(
            Guidance::new("Show one product")
                .with_command(format!("paneshop show {}", first.id)),
        );
    }

    ConsoleRenderer::new(ctx.json_output()).render(result)
}
