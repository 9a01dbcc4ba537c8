use crate::context::ExecutionContext;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::presentation::view_models::{CommandResultViewModel, ProductViewModel};
use anyhow::Result;
use paneshop_types::ProductId;

pub fn handle(ctx: &ExecutionContext, id: ProductId) -> Result<()> {
    let catalog = ctx.catalog();
    let product = catalog.require(id)?;

    let result = CommandResultViewModel::new(ProductViewModel::from(product));
    ConsoleRenderer::new(ctx.json_output()).render(result)
}
