use signatrix::logging::init_logging;
use signatrix::models::signal::{Analysis, SignalKind};
use signatrix::services::market_data::{MarketDataProvider, SyntheticMarketData};
use signatrix::signals::engine::SignalEngine;
use signatrix::strategies::registry::ProfileRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let registry = ProfileRegistry::builtin()?;
    let provider = SyntheticMarketData::new(45_000.0);
    let candles = provider.get_candles("BTC/USDT", "5m", 200)?;

    let mut last: Option<Analysis> = None;
    for profile in registry.profiles() {
        let analysis = SignalEngine::analyze(&candles, "5m", profile);
        println!("Profile {}:", profile.id);
        print_analysis(&analysis);
        println!();
        last = Some(analysis);
    }

    if let Some(analysis) = last {
        println!("Renderer payload (last profile):");
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    }

    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    println!("  Candles: {}", analysis.candlesticks.len());
    println!(
        "  Indicators: {}",
        analysis
            .indicators
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Signals: {}", analysis.signals.len());
    for signal in &analysis.signals {
        let marker = match signal.kind {
            SignalKind::Buy => "BUY ",
            SignalKind::Sell => "SELL",
        };
        println!(
            "    {} {} @ {:.2} strength {:.2} ({}/{})",
            marker,
            signal.time,
            signal.price,
            signal.strength,
            signal.conditions_met,
            signal.total_conditions
        );
        for reason in &signal.reasons {
            println!("      - {}", reason);
        }
    }
}
