//! Price calculator command.

use anyhow::Result;
use storefront_commerce::cart::{CategoryMarkup, PricingRule};

use super::PriceArgs;
use crate::context::Context;

/// Run the price command.
pub async fn run(args: PriceArgs, ctx: &Context) -> Result<()> {
    let display = CategoryMarkup.display_price(args.raw, &args.category);
    let currency = ctx.config.currency();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "raw": args.raw,
            "category": args.category,
            "display_price": display,
            "formatted_price": currency.format(display),
        }));
        return Ok(());
    }

    ctx.output.kv("raw", &args.raw.to_string());
    ctx.output.kv(
        "category",
        if args.category.is_empty() { "(none)" } else { args.category.as_str() },
    );
    ctx.output.kv("display", &format!("{} ({})", currency.format(display), display));

    Ok(())
}
