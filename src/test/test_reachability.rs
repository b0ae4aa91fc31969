#[cfg(test)]
mod test {
    use crate::test::test_util::{assert_symbols_match, GameTestState};

    fn reachable_from_player(game: &GameTestState) -> Vec<usize> {
        let state = &game.game_state;
        let player = state.player_position().expect("level has a player");
        state.grid().reachable_cells(state.symbols(), player)
    }

    #[test]
    fn find_reachable_finds_all_reachable() {
        let level = r#"
#@-#
#--#
##A#
#--#
"#;
        let game = GameTestState::new(level);
        let reachable = reachable_from_player(&game);

        let expected_symbols = r#"
_**_
_**_
____
____
"#;
        let actual_symbols = game.render_where_present(&reachable, '*', '_');
        assert_symbols_match(expected_symbols, actual_symbols.as_str());
    }

    #[test]
    fn find_reachable_follows_ragged_rows() {
        let level = r#"
#@+----
#-#
#----#--
###-
"#;
        let game = GameTestState::new(level);
        let reachable = reachable_from_player(&game);

        let expected_symbols = r#"
_******
_*_
_****___
___*
"#;
        let actual_symbols = game.render_where_present(&reachable, '*', '_');
        assert_symbols_match(expected_symbols, actual_symbols.as_str());
    }

    #[test]
    fn boxes_and_walls_split_the_board() {
        let level = r#"
#@-a-+#
#--#--#
"#;
        let game = GameTestState::new(level);
        let state = &game.game_state;
        let grid = state.grid();
        let symbols = state.symbols();

        // 1 player, 3 box, 5 beyond the box, 12 beyond the wall
        assert!(!grid.can_reach(symbols, 1, 5));
        assert!(!grid.can_reach(symbols, 1, 12));
        assert!(grid.can_reach(symbols, 1, 9));
        assert!(grid.can_reach(symbols, 5, 12));
        assert!(grid.can_reach(symbols, 12, 5));
    }
}
