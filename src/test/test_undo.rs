#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn undo_on_empty_log_does_nothing() {
        let level = r#"
#@-A+#
"#;
        let mut game = GameTestState::new(level);
        assert!(!game.game_state.undo());
        game.assert_matches(level);
    }

    #[test]
    fn undo_restores_box_case_and_player() {
        let level = r#"
#@-A+#
"#;
        let mut game = GameTestState::new(level);
        game.assert_push('A', Right);
        game.assert_matches(r#"
#--@a#
"#);
        game.assert_undo();
        game.assert_matches(level);
        assert!(game.game_state.undo_log().is_empty());
    }

    #[test]
    fn undo_puts_player_back_on_goal() {
        let level = r#"
#*A-#
"#;
        let mut game = GameTestState::new(level);
        game.assert_push('A', Right);
        game.assert_undo();
        game.assert_matches(level);
    }

    #[test]
    fn undo_moves_box_back_onto_goal() {
        let level = r#"
#@-a-#
"#;
        let mut game = GameTestState::new(level);
        game.assert_push('A', Right);
        game.assert_matches(r#"
#--*A#
"#);
        game.assert_undo();
        game.assert_matches(level);
    }

    #[test]
    fn undo_returns_player_to_a_distant_start() {
        let level = r#"
#####
#-@-#
#-A-#
#---#
#####
"#;
        let mut game = GameTestState::new(level);
        game.assert_push('A', Up);
        game.assert_undo();
        game.assert_matches(level);
    }

    #[test]
    fn undo_when_player_started_on_the_goal_the_box_now_covers() {
        let level = r#"
#######
#--*--#
#--A--#
#-----#
#######
"#;
        let mut game = GameTestState::new(level);
        game.assert_push('A', Up);
        game.assert_matches(r#"
#######
#--a--#
#--@--#
#-----#
#######
"#);
        game.assert_undo();
        game.assert_matches(level);
    }

    #[test]
    fn undo_walks_back_through_many_pushes() {
        let level = r#"
#######
#@----#
#-A-+-#
#--b--#
#-+---#
#######
"#;
        let mut game = GameTestState::new(level);
        game.assert_pushes(&[
            ('A', Right),
            ('A', Right),
            ('b', Down),
            ('b', Left),
            ('a', Left),
            ('A', Down),
        ]);
        assert_eq!(game.game_state.undo_log().len(), 6);
        for _ in 0..6 {
            game.assert_undo();
        }
        game.assert_matches(level);
        assert!(!game.game_state.undo());
    }

    #[test]
    fn rejected_push_between_pushes_does_not_disturb_undo() {
        let level = r#"
#@-A-+#
"#;
        let mut game = GameTestState::new(level);
        game.assert_push('A', Right);
        game.assert_rejected('A', Left);
        game.assert_push('A', Right);
        game.assert_matches(r#"
#---@a#
"#);
        game.assert_undo();
        game.assert_matches(r#"
#--@A+#
"#);
        game.assert_undo();
        game.assert_matches(level);
    }
}
