use colored::Colorize;
use pg_mechanics::DiceExpr;

use super::Context;

pub fn run(ctx: &mut Context, expr: &str, times: usize) -> Result<(), String> {
    let expr = DiceExpr::parse(expr).map_err(|e| e.to_string())?;
    if times == 0 {
        return Err("times must be at least 1".into());
    }

    println!(
        "  {} ({}..={})",
        expr.to_string().bold(),
        expr.min_total(),
        expr.max_total()
    );
    for _ in 0..times {
        let result = expr.roll(&mut ctx.rng);
        println!("  {result}");
    }
    Ok(())
}
