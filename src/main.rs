use shadow_gate::build_info;
use shadow_gate::character::stats::{StatType, Stats};
use shadow_gate::combat::types::Rank;
use shadow_gate::content::{dungeon_gates, story_chapters};
use shadow_gate::core::{Action, GameConfig, GameEvent, LogCategory, Phase, Session};
use shadow_gate::economy::shop::catalog;
use shadow_gate::economy::skill_upgrade::{upgrade_cost, UpgradeKind};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// What a line of input asks the driver to do.
#[derive(Debug, PartialEq)]
enum Command {
    Dispatch(Action),
    Status,
    Shop,
    Stories,
    Help,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Command::Invalid(String::new());
    };
    let arg = words.next();
    let rest = words.next();

    let need = |what: &str| Command::Invalid(format!("Usage: {} {}", verb, what));

    match verb.to_lowercase().as_str() {
        "status" | "s" => Command::Status,
        "shop" => Command::Shop,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "dungeon" | "gate" => match arg.and_then(Rank::parse) {
            Some(rank) => {
                let theme = dungeon_gates()
                    .into_iter()
                    .find(|gate| gate.rank == rank)
                    .map(|gate| gate.theme.to_string());
                Command::Dispatch(Action::EnterDungeon { rank, theme })
            }
            None => need("<E|D|C|B|A|S>"),
        },
        "story" => match arg {
            None => Command::Stories,
            Some(raw) => match raw.parse::<usize>() {
                Ok(number) if number >= 1 => Command::Dispatch(Action::StartStory {
                    chapter: number - 1,
                }),
                _ => need("[chapter number]"),
            },
        },
        "attack" | "a" => Command::Dispatch(Action::Attack),
        "skill" => match arg {
            Some(id) => Command::Dispatch(Action::UseSkill {
                skill_id: id.to_string(),
            }),
            None => need("<skill id>"),
        },
        "item" | "use" => match arg {
            Some(id) => Command::Dispatch(Action::UseItem {
                item_id: id.to_string(),
            }),
            None => need("<item id>"),
        },
        "flee" | "run" => Command::Dispatch(Action::Flee),
        "extract" | "arise" => Command::Dispatch(Action::Extract),
        "leave" => Command::Dispatch(Action::LeaveVictory),
        "buy" => match arg {
            Some(id) => Command::Dispatch(Action::Buy {
                item_id: id.to_string(),
            }),
            None => need("<item id>"),
        },
        "equip" => match arg {
            Some(uid) => Command::Dispatch(Action::ToggleEquip {
                uid: uid.to_string(),
            }),
            None => need("<uid or item id>"),
        },
        "upgrade" => match (arg, rest.and_then(UpgradeKind::parse)) {
            (Some(id), Some(kind)) => Command::Dispatch(Action::UpgradeSkill {
                skill_id: id.to_string(),
                kind,
            }),
            _ => need("<skill id> <damage|cost|cooldown>"),
        },
        "stat" => match arg.and_then(StatType::parse) {
            Some(stat) => Command::Dispatch(Action::AllocateStat(stat)),
            None => need("<str|agi|sns|vit|int>"),
        },
        "train" => Command::Dispatch(Action::Train),
        "rest" => Command::Dispatch(Action::Rest),
        "code" => match arg {
            Some(code) => Command::Dispatch(Action::AdminCode(code.to_string())),
            None => need("<code>"),
        },
        other => Command::Invalid(format!("Unknown command '{}'. Type 'help'.", other)),
    }
}

fn marker(category: LogCategory) -> &'static str {
    match category {
        LogCategory::System => "* ",
        LogCategory::Combat => "  ",
        LogCategory::Info => "- ",
        LogCategory::Danger => "! ",
        LogCategory::Gain => "+ ",
        LogCategory::Story => "# ",
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Prints events in order, pausing before the enemy's counter and before an
/// extraction result.
fn print_events(events: &[GameEvent], config: &GameConfig) {
    let mut countered = false;
    for event in events {
        match event {
            GameEvent::EnemyAttack { .. } | GameEvent::Dodged { .. } if !countered => {
                countered = true;
                pause(config.enemy_turn_delay_ms);
            }
            GameEvent::ExtractionSucceeded { .. } | GameEvent::ExtractionFailed => {
                pause(config.extraction_delay_ms);
            }
            _ => {}
        }
        let (text, category) = event.log_line();
        println!("{}{}", marker(category), text);
    }
}

fn print_status(session: &Session) {
    let player = session.player();
    println!(
        "{} - Lv.{} {} [{}]",
        player.name,
        player.level,
        player.job.name(),
        player.title
    );
    println!(
        "  EXP {}/{}  HP {}/{}  MP {}/{}  Gold {}",
        player.current_exp,
        player.max_exp,
        player.hp,
        player.max_hp,
        player.mp,
        player.max_mp,
        player.gold
    );
    print_stats(&player.stats, player.stat_points);

    println!("  Skills:");
    for skill in &player.skills {
        let upgrade = if skill.is_offensive() {
            format!(", upgrade {}G", upgrade_cost(skill.level))
        } else {
            String::new()
        };
        println!(
            "    {} ({}) Lv.{}: {} MP, cd {}{}",
            skill.name, skill.id, skill.level, skill.mp_cost, skill.cooldown, upgrade
        );
    }
    if !player.companions.is_empty() {
        println!("  Shadows:");
        for companion in &player.companions {
            println!(
                "    {} [{}] +{} ATK",
                companion.name, companion.rank, companion.attack_bonus
            );
        }
    }
    if !player.inventory.is_empty() {
        println!("  Inventory:");
        for entry in &player.inventory {
            let key = entry.uid.as_deref().unwrap_or(&entry.item.id);
            let equipped = if entry.is_equipped { " (equipped)" } else { "" };
            println!(
                "    {} x{} [{}]{}",
                entry.item.name, entry.count, key, equipped
            );
        }
    }

    match session.phase() {
        Phase::Idle => println!("  Resting in town."),
        Phase::Intro { enemy, .. } => println!("  Something approaches: {}", enemy.name),
        Phase::Combat(encounter) => println!(
            "  Fighting {} [{}] HP {}/{}",
            encounter.enemy.name,
            encounter.enemy.rank,
            encounter.enemy.display_hp(),
            encounter.enemy.max_hp
        ),
        Phase::Victory {
            defeated,
            extraction_attempted,
        } => {
            let hint = if *extraction_attempted {
                ""
            } else {
                " ('extract' to raise its shadow)"
            };
            println!("  {} lies defeated.{}", defeated.name, hint);
        }
    }
}

fn print_stats(stats: &Stats, points: u32) {
    let line: Vec<String> = StatType::all()
        .iter()
        .map(|stat| format!("{} {}", stat.abbrev(), stats.get(*stat)))
        .collect();
    println!("  {}  (points: {})", line.join("  "), points);
}

fn print_shop(session: &Session) {
    if !session.player().shop_unlocked() {
        println!("- The shop opens at level 5.");
        return;
    }
    for item in catalog() {
        println!(
            "  {:<18} {:<32} {:>8}G  {}",
            item.id, item.name, item.price, item.description
        );
    }
}

fn print_stories(session: &Session) {
    let stage = session.player().story_stage;
    for chapter in story_chapters() {
        let status = if chapter.id < stage {
            "cleared"
        } else if chapter.id == stage {
            "available"
        } else {
            "locked"
        };
        println!(
            "  {}. {} (Lv.{}+) [{}]",
            chapter.id + 1,
            chapter.title,
            chapter.required_level,
            status
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  status               Show your hunter");
    println!("  dungeon <rank>       Enter a gate (E, D, C, B, A, S)");
    println!("  story [n]            List story chapters or start chapter n");
    println!("  attack | skill <id> | item <id> | flee");
    println!("  extract | leave      After a victory");
    println!("  shop | buy <id> | equip <uid>");
    println!("  upgrade <skill> <damage|cost|cooldown>");
    println!("  stat <str|agi|sns|vit|int>");
    println!("  train | rest | code <code> | quit");
}

fn run_action(session: &mut Session, action: Action) {
    let intro_delay = match action {
        Action::EnterDungeon { .. } => session.config().intro_delay_ms,
        Action::StartStory { .. } => session.config().story_intro_delay_ms,
        _ => 0,
    };

    match session.dispatch(action) {
        Ok(events) => {
            print_events(&events, session.config());
            if matches!(session.phase(), Phase::Intro { .. }) {
                pause(intro_delay);
                if let Ok(events) = session.dispatch(Action::Engage) {
                    print_events(&events, session.config());
                }
            }
        }
        Err(rejection) => println!("{}{}", marker(rejection.category()), rejection),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "shadow-gate {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Shadow Gate - turn-based hunter RPG\n");
                println!("Usage: shadow-gate [--version | --help]\n");
                println!("Environment:");
                println!("  SHADOW_GATE_SEED         Fixed RNG seed");
                println!("  SHADOW_GATE_CONTENT_URL  Content service endpoint");
                println!("  RUST_LOG                 Diagnostic log filter");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'shadow-gate --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut session = loop {
        print!("Enter your name, hunter: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        match Session::start(&line?, config.clone()) {
            Ok(session) => break session,
            Err(rejection) => println!("{}{}", marker(rejection.category()), rejection),
        }
    };
    for entry in session.log().entries() {
        println!("{}{}", marker(entry.category), entry.text);
    }
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match parse_command(&line?) {
            Command::Dispatch(action) => run_action(&mut session, action),
            Command::Status => print_status(&session),
            Command::Shop => print_shop(&session),
            Command::Stories => print_stories(&session),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Invalid(message) if message.is_empty() => {}
            Command::Invalid(message) => println!("{}", message),
        }
    }
    Ok(())
}
