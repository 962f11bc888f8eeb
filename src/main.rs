use clap::Parser;
use console_lotto::domain::winning::Rank;
use console_lotto::utils::logger;
use console_lotto::{
    CliConfig, ConsolePrompter, ConsoleReader, GameRules, LottoError, LottoGame,
    RandomNumberGenerator,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting console-lotto");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let rules = match config.load_rules() {
        Ok(rules) => rules,
        Err(e) => exit_with(&e),
    };

    if config.dry_run {
        display_rules_summary(&rules);
        return Ok(());
    }

    let generator = RandomNumberGenerator::from_seed_option(rules.seed);
    let mut game = LottoGame::new(
        ConsoleReader::stdin(),
        ConsolePrompter::stdout(),
        generator,
        rules,
    )
    .with_json_summary(config.json);

    match game.run() {
        Ok(summary) => {
            tracing::info!(
                "Round complete: return rate {}% on {} tickets",
                summary.return_rate,
                summary.ticket_count
            );
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &LottoError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn display_rules_summary(rules: &GameRules) {
    println!("Rules Summary:");
    println!("  Ticket price: {}", rules.ticket_price);
    match rules.max_purchase_amount {
        Some(max) => println!("  Max purchase: {}", max),
        None => println!("  Max purchase: unlimited"),
    }
    for rank in Rank::WINNING {
        println!("  {:?}: {}", rank, rules.prizes.prize(rank));
    }
    match rules.max_attempts {
        Some(attempts) => println!("  Input attempts: {}", attempts),
        None => println!("  Input attempts: unlimited"),
    }
    match rules.seed {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: random"),
    }
}
