// src/bin/poker_mirror_dev_cli.rs

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use serde::Deserialize;

use poker_mirror::domain::{Chips, Deck, Game, HandDealer, PlayerState, Stage, TableConfig};
use poker_mirror::engine::{
    advance_to_showdown, check_action, EngineContext, PlayerAction, PlayerActionKind,
};

#[derive(Parser, Debug)]
#[command(name = "poker_mirror_dev_cli", about = "Прогон раздачи через движок-зеркало")]
struct Cli {
    /// Seed детерминированного перемешивания.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Стартовый стек каждого игрока.
    #[arg(long, default_value_t = 1000)]
    stack: u64,

    /// Количество игроков (2..max_seats).
    #[arg(long, default_value_t = 2)]
    players: u8,

    /// JSON с конфигом стола (TableConfig).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON-снапшот {game, players, action}: только проверить действие.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Deserialize)]
struct SnapshotFile {
    game: Game,
    players: Vec<PlayerState>,
    action: PlayerAction,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TableConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => TableConfig::default(),
    };
    let ctx = EngineContext::new(config)?;

    if let Some(path) = &cli.snapshot {
        let snap: SnapshotFile = serde_json::from_str(&fs::read_to_string(path)?)?;
        let res = ctx.validate_action(&snap.game, &snap.players, &snap.action);
        println!("{}", serde_json::to_string_pretty(&res)?);
        return Ok(());
    }

    play_demo_hand(&ctx, &cli)
}

/// Сыграть одну раздачу: все чекают или коллируют до шоудауна.
fn play_demo_hand(ctx: &EngineContext, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== POKER MIRROR DEV CLI ===\n");

    let mut game = ctx.new_game();
    let seat_count = cli.players.clamp(2, ctx.config().max_seats);
    let mut players = Vec::new();
    for seat in 0..seat_count {
        game.seat_player(seat, 100 + seat as u64);
        players.push(PlayerState::new(seat, 100 + seat as u64, Chips(cli.stack)));
    }

    let mut deck = Deck::standard_52();
    deck.shuffle_with_seed(cli.seed);
    let mut dealer = HandDealer::new(deck);
    for (p, hole) in players.iter_mut().zip(dealer.deal_hole_cards(seat_count as usize)?) {
        println!("seat {} получил {} {}", p.seat, hole[0], hole[1]);
        p.hole_cards = hole.to_vec();
    }

    let (mut g, mut ps) = ctx.start_hand(&game, &players)?;
    info!("hand started at stage {:?}", g.stage);

    loop {
        let seat = g.current_player_index;
        let kind = [PlayerActionKind::Check, PlayerActionKind::Call, PlayerActionKind::AllIn]
            .into_iter()
            .find(|k| {
                ps.iter()
                    .find(|p| p.seat == seat)
                    .map(|p| check_action(&g, p, k).is_ok())
                    .unwrap_or(false)
            })
            .unwrap_or(PlayerActionKind::Fold);

        let outcome = ctx.apply_action(&g, &ps, &PlayerAction::new(seat, kind))?;
        println!("{:?}: seat {} {:?}, банк {}", outcome.game.stage, seat, kind, outcome.game.pot);
        g = outcome.game;
        ps = outcome.players;

        if outcome.showdown_ready {
            let missing = 5usize.saturating_sub(g.community_cards.len());
            let rest = dealer.draw(missing)?;
            g = advance_to_showdown(&g, &rest)?;
            break;
        }
        if outcome.round_complete {
            let next = g.stage.next().unwrap_or(Stage::Showdown);
            let cards = dealer.deal_community(next)?;
            let (ng, nps) = ctx.advance_stage(&g, &ps, &cards)?;
            g = ng;
            ps = nps;
            let board: Vec<String> = g.community_cards.iter().map(|c| c.to_string()).collect();
            println!("--- {:?}: {}", g.stage, board.join(" "));
        }
    }

    let settlement = ctx.settle_hand(&g, &ps)?;
    for w in &settlement.winners {
        let label = w.hand.as_ref().map(|h| h.label.as_str()).unwrap_or("без вскрытия");
        println!("seat {} выигрывает {} ({})", w.seat, w.win_amount, label);
    }
    for p in &settlement.players {
        println!("seat {}: стек {}", p.seat, p.chip_stack);
    }
    Ok(())
}
