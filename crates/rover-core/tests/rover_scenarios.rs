use rover_core::{Command, CommandError, Coordinate, Facing, Navigator, Rover};

#[test]
fn rover_runs_a_mixed_turn_and_move_sequence() {
    let mut rover = Rover::from_position("0:0:N").unwrap();

    rover.run_commands("LFRFF").unwrap();

    assert_eq!(rover.formatted_location(), "9:2:N");
}

#[test]
fn rover_wraps_around_the_grid_while_moving_east_then_south() {
    let mut rover = Rover::from_position("8:3:E").unwrap();

    rover.run_commands("FFFRFF").unwrap();

    assert_eq!(rover.formatted_location(), "1:1:S");
}

#[test]
fn lowercase_command_letters_behave_like_uppercase() {
    let mut rover = Rover::from_position("8:3:E").unwrap();

    rover.run_commands("FFfrFf").unwrap();

    assert_eq!(rover.formatted_location(), "1:1:S");
}

#[test]
fn a_negative_starting_coordinate_is_an_invalid_position() {
    let result = Rover::from_position("-1:0:S");

    assert!(result.is_err());
}

#[test]
fn a_bad_letter_aborts_the_sequence_but_keeps_prior_commands_applied() {
    let mut rover = Rover::from_position("0:0:N").unwrap();

    let result = rover.run_commands("FRDD");

    assert_eq!(result, Err(CommandError::Unrecognized('D')));
    assert_eq!(rover.formatted_location(), "0:1:E");
}

#[test]
fn coordinate_creation_normalizes_via_modulo() {
    assert_eq!(
        Coordinate::create(23, 15).unwrap(),
        Coordinate::create(3, 5).unwrap()
    );
}

#[test]
fn identical_inputs_always_produce_identical_output() {
    let run = |position: &str, commands: &str| {
        let mut rover = Rover::from_position(position).unwrap();
        rover.run_commands(commands).unwrap();
        rover.formatted_location()
    };

    let first = run("5:9:E", "LFFLFLF");
    let second = run("5:9:E", "LFFLFLF");

    assert_eq!(first, second);
    assert_eq!(first, "4:0:S");
}

#[test]
fn every_facing_survives_a_full_lap_around_either_axis() {
    for facing in [Facing::North, Facing::South, Facing::East, Facing::West] {
        let start = Navigator::new(Coordinate::create(2, 6).unwrap(), facing);

        let mut walked = start;
        for _ in 0..10 {
            walked = walked.forward();
        }

        assert_eq!(walked, start, "ten forward steps facing {facing} should lap the grid");
    }
}

#[test]
fn a_rover_built_from_a_navigator_matches_one_built_from_text() {
    let navigator = Navigator::new(Coordinate::create(8, 3).unwrap(), Facing::East);
    let mut from_navigator = Rover::new(navigator);
    let mut from_text = Rover::from_position("8:3:E").unwrap();

    from_navigator.run_commands("FFFRFF").unwrap();
    from_text.run_commands("FFFRFF").unwrap();

    assert_eq!(
        from_navigator.formatted_location(),
        from_text.formatted_location()
    );
}

#[test]
fn single_commands_match_the_transition_table() {
    let cases = [
        ("0:0:N", Command::Left, "0:0:W"),
        ("0:0:N", Command::Right, "0:0:E"),
        ("0:0:N", Command::Forward, "0:1:N"),
        ("0:0:S", Command::Forward, "0:9:S"),
        ("0:0:E", Command::Forward, "1:0:E"),
        ("0:0:W", Command::Forward, "9:0:W"),
    ];

    for (position, command, expected) in cases {
        let mut rover = Rover::from_position(position).unwrap();
        rover.run_commands(command.as_ref()).unwrap();

        assert_eq!(rover.formatted_location(), expected);
    }
}
