//! Integration tests for the full move/undo/win loop
//!
//! These drive the public facade the way the binary does: parse level text,
//! build a puzzle, replay a script of directions, and check what the
//! renderer-facing queries report.

use tui_ninelives::core::{MoveOutcome, Puzzle};
use tui_ninelives::level::Level;
use tui_ninelives::types::{Cell, Direction, EntityKind, Form};

fn puzzle_from(name: &str, rows: &[&str]) -> Puzzle {
    let level = Level::parse(name, rows).expect("level text should parse");
    Puzzle::new(level.entities, level.width, level.height).expect("layout should be valid")
}

/// Apply every direction in order, asserting each one commits.
fn walk(p: &mut Puzzle, dirs: &[Direction]) {
    for dir in dirs {
        let outcome = p.apply_move(*dir);
        assert!(outcome.applied, "step {dir:?} should apply");
        assert!(!outcome.completed, "step {dir:?} should not win");
    }
}

/// Everything the engine promises to restore on undo: the occupant kinds of
/// every cell, the actor's form and cell, and the gate state.
fn observe(p: &Puzzle) -> (Vec<Vec<EntityKind>>, Form, bool, Cell) {
    let mut cells = Vec::new();
    for y in 0..p.height() as i8 {
        for x in 0..p.width() as i8 {
            cells.push(p.occupants_at(Cell::new(x, y)).to_vec());
        }
    }
    (cells, p.form(), p.is_gate_open(), p.actor_cell())
}

#[test]
fn test_pull_gate_and_win_sequence() {
    // One room, one box, one spike, one switch, one exit. Winning takes a
    // rebirth, a closed-gate refusal, and dragging the box onto the switch.
    let mut p = puzzle_from(
        "gauntlet",
        &[
            "..........",
            ".bk  z  p.",
            ".  x     .",
            "..........",
        ],
    );
    assert_eq!(p.form(), Form::Solid);
    assert!(!p.is_gate_open());

    // Solid form leaves the trailing box where it is.
    walk(&mut p, &[Direction::Right]);
    assert_eq!(
        p.occupants_at(Cell::new(1, 1)).as_slice(),
        &[EntityKind::Box]
    );

    // Stepping onto the spike costs the solid form.
    walk(&mut p, &[Direction::Down]);
    assert_eq!(p.form(), Form::Spectral);

    // Drifting back off leaves the spike intact underfoot.
    walk(&mut p, &[Direction::Up]);
    assert!(p.occupants_at(Cell::new(3, 2)).contains(&EntityKind::Spike));

    // The gate is still shut: the exit turns the ghost away.
    walk(&mut p, &[Direction::Right; 4]);
    let refused = p.apply_move(Direction::Right);
    assert_eq!(
        refused,
        MoveOutcome {
            applied: false,
            completed: false,
        }
    );
    assert_eq!(p.actor_cell(), Cell::new(7, 1));

    // Walk back and drag the box all the way onto the switch.
    walk(&mut p, &[Direction::Left; 5]);
    walk(&mut p, &[Direction::Right]);
    assert_eq!(
        p.occupants_at(Cell::new(2, 1)).as_slice(),
        &[EntityKind::Box]
    );
    walk(&mut p, &[Direction::Right; 3]);
    assert!(p.is_gate_open(), "box on the switch should open the gate");
    assert!(p.occupants_at(Cell::new(5, 1)).contains(&EntityKind::Box));
    assert!(p.occupants_at(Cell::new(5, 1)).contains(&EntityKind::Switch));

    // Detour through the open row so the box stays on the switch.
    walk(&mut p, &[Direction::Down, Direction::Right, Direction::Up]);
    assert!(p.is_gate_open());

    let won = p.apply_move(Direction::Right);
    assert_eq!(
        won,
        MoveOutcome {
            applied: false,
            completed: true,
        }
    );
    assert!(p.is_completed());
    // The winning move commits nothing; the actor never stands on the exit.
    assert_eq!(p.actor_cell(), Cell::new(7, 1));
    assert_eq!(
        p.occupants_at(Cell::new(8, 1)).as_slice(),
        &[EntityKind::Exit]
    );
}

#[test]
fn test_inverse_law_restores_every_intermediate_state() {
    // A tour with pushes, a rebirth, rejected moves in both forms, and two
    // pulls (one of which opens the gate). No exit, so the tour can never
    // complete and the undo floor stays reachable.
    let mut p = puzzle_from(
        "tour",
        &[
            ".......",
            ".k b  .",
            ". xbz .",
            ".     .",
            ".......",
        ],
    );
    let script = [
        Direction::Right,
        Direction::Right, // push
        Direction::Down,  // push
        Direction::Down,  // rejected: box against the wall
        Direction::Left,  // rebirth
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Right, // rejected: ghosts cannot push
        Direction::Up,
        Direction::Right,
        Direction::Down, // rejected: box ahead
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Right, // rejected: box ahead
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Left, // rejected: box ahead
        Direction::Down,
        Direction::Left,
        Direction::Down, // pull onto the switch: gate opens
        Direction::Up,   // rejected: box ahead
        Direction::Left, // rejected: box ahead
        Direction::Right, // pull
    ];

    let mut trail = vec![observe(&p)];
    for dir in script {
        let outcome = p.apply_move(dir);
        assert!(!outcome.completed, "tour must never complete");
        if outcome.applied {
            trail.push(observe(&p));
        }
    }

    // The script is built to rebirth, flip the gate, and bounce off things.
    assert_eq!(p.form(), Form::Spectral);
    assert!(p.is_gate_open());
    assert!(trail.len() - 1 < script.len(), "some moves must reject");
    assert_eq!(p.moves_committed(), trail.len() - 1);

    while trail.len() > 1 {
        assert_eq!(observe(&p), *trail.last().expect("non-empty trail"));
        p.undo();
        trail.pop();
        assert_eq!(observe(&p), *trail.last().expect("non-empty trail"));
    }
    assert_eq!(p.moves_committed(), 0);
    assert_eq!(p.form(), Form::Solid);
    assert!(!p.is_gate_open());

    // Undo below the floor changes nothing.
    p.undo();
    assert_eq!(observe(&p), trail[0]);
}

#[test]
fn test_rejected_inputs_change_nothing() {
    let cases: &[(&str, &[&str], Direction)] = &[
        ("box-wall", &[".....", ".kb..", "....."], Direction::Right),
        ("box-box", &[".....", ".kbb.", "....."], Direction::Right),
        ("box-exit", &[".....", ".kbp.", "....."], Direction::Right),
        ("wall", &[".....", ".k  .", "....."], Direction::Up),
        ("solid-exit", &[".....", ".kp .", "....."], Direction::Right),
    ];
    for (name, rows, dir) in cases {
        let mut p = puzzle_from(name, rows);
        let before = observe(&p);
        let outcome = p.apply_move(*dir);
        assert_eq!(
            outcome,
            MoveOutcome {
                applied: false,
                completed: false,
            },
            "case '{name}' should reject"
        );
        assert_eq!(observe(&p), before, "case '{name}' must not mutate");
        assert_eq!(p.moves_committed(), 0);
    }
}

#[test]
fn test_push_spikefall_removes_both_and_undo_restores_them() {
    let mut p = puzzle_from("spikefall", &["......", ".kbx .", "......"]);
    walk(&mut p, &[Direction::Right]);

    // Box and spike are gone from both cells; the actor took the box's cell.
    assert_eq!(p.actor_cell(), Cell::new(2, 1));
    assert_eq!(
        p.occupants_at(Cell::new(2, 1)).as_slice(),
        &[EntityKind::Actor]
    );
    assert!(p.occupants_at(Cell::new(3, 1)).is_empty());

    p.undo();
    assert_eq!(p.actor_cell(), Cell::new(1, 1));
    assert_eq!(
        p.occupants_at(Cell::new(2, 1)).as_slice(),
        &[EntityKind::Box]
    );
    assert_eq!(
        p.occupants_at(Cell::new(3, 1)).as_slice(),
        &[EntityKind::Spike]
    );
}

#[test]
fn test_pull_spikefall_destroys_on_the_vacated_cell() {
    let mut p = puzzle_from("vacated", &["......", ". bxk.", "......"]);

    // Walk left onto the spike: rebirth, with the box now directly ahead.
    walk(&mut p, &[Direction::Left]);
    assert_eq!(p.form(), Form::Spectral);
    assert_eq!(p.actor_cell(), Cell::new(3, 1));

    // Stepping back off drags the box onto the vacated spike; both die.
    walk(&mut p, &[Direction::Right]);
    assert_eq!(p.actor_cell(), Cell::new(4, 1));
    assert!(p.occupants_at(Cell::new(2, 1)).is_empty());
    assert!(p.occupants_at(Cell::new(3, 1)).is_empty());

    p.undo();
    assert_eq!(p.actor_cell(), Cell::new(3, 1));
    assert_eq!(
        p.occupants_at(Cell::new(2, 1)).as_slice(),
        &[EntityKind::Box]
    );
    assert!(p.occupants_at(Cell::new(3, 1)).contains(&EntityKind::Spike));

    p.undo();
    assert_eq!(p.actor_cell(), Cell::new(4, 1));
    assert_eq!(p.form(), Form::Solid);
}
