use anyhow::{bail, ensure, Result};
use armada::{init_logging, HuntTargetAi, MoveHistory, MoveRecord, Player, ShotOutcome};
use rand::{rngs::SmallRng, SeedableRng};

fn fire_once(
    shooter: &mut Player,
    opponent: &mut Player,
    ai: &mut HuntTargetAi,
    rng: &mut SmallRng,
) -> Option<((usize, usize), ShotOutcome)> {
    let (row, col) = ai.select_target(rng, shooter.shots())?;
    let outcome = shooter.fire_at(row, col, opponent);
    ai.observe((row, col), outcome, shooter.shots());
    Some(((row, col), outcome))
}

fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    let (seed1, seed2) = match args.len() {
        1 => (7, 11),
        3 => (args[1].parse()?, args[2].parse()?),
        _ => bail!("usage: {} [seed1 seed2]", args[0]),
    };

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let mut port = Player::new("Port");
    let mut starboard = Player::new("Starboard");
    ensure!(
        port.place_ships_randomly(&mut rng1) == 0,
        "Port could not place its fleet"
    );
    ensure!(
        starboard.place_ships_randomly(&mut rng2) == 0,
        "Starboard could not place its fleet"
    );

    let mut ai1 = HuntTargetAi::new();
    let mut ai2 = HuntTargetAi::new();
    let mut history = MoveHistory::new(200);
    let mut port_turn = true;
    let mut shot_no = 0u64;

    let winner = loop {
        let fired = if port_turn {
            fire_once(&mut port, &mut starboard, &mut ai1, &mut rng1)
        } else {
            fire_once(&mut starboard, &mut port, &mut ai2, &mut rng2)
        };
        let Some(((row, col), outcome)) = fired else {
            bail!("board exhausted without a winner");
        };
        shot_no += 1;
        ensure!(shot_no <= 400, "game did not finish in 400 shots");

        let actor = if port_turn { "Port" } else { "Starboard" };
        if matches!(
            outcome,
            ShotOutcome::Miss | ShotOutcome::Hit | ShotOutcome::Sunk
        ) {
            if let Err(err) = history.push(MoveRecord::new(actor, row, col, outcome, port_turn, shot_no)) {
                eprintln!("history: {}", err);
            }
        }

        if starboard.has_lost() {
            break "Port";
        }
        if port.has_lost() {
            break "Starboard";
        }
        if outcome == ShotOutcome::Miss {
            port_turn = !port_turn;
        }
    };

    println!("winner: {} after {} shots", winner, shot_no);
    println!(
        "Port: {} ships afloat, sank {}",
        port.ships_remaining(),
        port.ships_sunk()
    );
    println!(
        "Starboard: {} ships afloat, sank {}",
        starboard.ships_remaining(),
        starboard.ships_sunk()
    );
    println!("last moves:");
    for record in history.recent(5) {
        println!("  {}", record);
    }
    Ok(())
}
