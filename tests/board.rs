#[cfg(test)]
mod tests {
    use taskboard::libs::board::{Board, BoardError, Location, Move};
    use taskboard::libs::task::{Status, Task, TaskStatus};
    use test_context::{test_context, TestContext};

    struct BoardTestContext {
        board: Board,
    }

    impl TestContext for BoardTestContext {
        fn setup() -> Self {
            BoardTestContext {
                board: Board::partition(vec![
                    Task::new("t1", "Write docs", Status::Pending),
                    Task::new("t2", "Fix login", Status::Pending),
                    Task::new("t3", "Review PR", Status::InProgress),
                    Task::new("t4", "Release", Status::Completed),
                ]),
            }
        }
    }

    fn ids(board: &Board, status: Status) -> Vec<&str> {
        board.column(status).iter().map(|task| task.id.as_str()).collect()
    }

    fn loc(column: Status, index: usize) -> Location {
        Location::new(column, index)
    }

    #[test]
    fn test_partition_keeps_order_within_columns() {
        let board = Board::partition(vec![
            Task::new("a", "A", Status::Completed),
            Task::new("b", "B", Status::Pending),
            Task::new("c", "C", Status::Completed),
            Task::new("d", "D", Status::Pending),
        ]);

        assert_eq!(ids(&board, Status::Pending), vec!["b", "d"]);
        assert!(board.column(Status::InProgress).is_empty());
        assert_eq!(ids(&board, Status::Completed), vec!["a", "c"]);
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_partition_drops_unrecognized_status() {
        let mut archived = Task::new("x", "Old", Status::Pending);
        archived.status = TaskStatus::Unrecognized("archived".to_string());

        let board = Board::partition(vec![archived, Task::new("y", "New", Status::Pending)]);

        assert_eq!(board.len(), 1);
        assert!(board.locate("x").is_none());
        assert_eq!(ids(&board, Status::Pending), vec!["y"]);
    }

    #[test]
    fn test_partition_empty() {
        let board = Board::partition(Vec::new());
        assert!(board.is_empty());
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_move_across_columns_rewrites_status() {
        let board = Board::partition(vec![
            Task::new("t1", "T1", Status::Pending),
            Task::new("t2", "T2", Status::Pending),
        ]);

        let next = board
            .apply_move(&Move::new(loc(Status::Pending, 0), loc(Status::InProgress, 0)))
            .unwrap();

        assert_eq!(ids(&next, Status::Pending), vec!["t2"]);
        assert_eq!(ids(&next, Status::InProgress), vec!["t1"]);
        assert!(next.column(Status::Completed).is_empty());
        assert_eq!(next.column(Status::InProgress)[0].status, TaskStatus::Known(Status::InProgress));
        // The original board is untouched.
        assert_eq!(ids(&board, Status::Pending), vec!["t1", "t2"]);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_reorder_within_column(ctx: &mut BoardTestContext) {
        let next = ctx
            .board
            .apply_move(&Move::new(loc(Status::Pending, 0), loc(Status::Pending, 1)))
            .unwrap();

        assert_eq!(ids(&next, Status::Pending), vec!["t2", "t1"]);
        assert_eq!(next.column(Status::Pending)[1].status, TaskStatus::Known(Status::Pending));
        assert_eq!(next.column(Status::InProgress), ctx.board.column(Status::InProgress));
        assert_eq!(next.column(Status::Completed), ctx.board.column(Status::Completed));
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_noop_move_is_identity(ctx: &mut BoardTestContext) {
        let same = loc(Status::Pending, 1);
        let next = ctx.board.apply_move(&Move::new(same, same)).unwrap();
        assert_eq!(next, ctx.board);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_move_preserves_task_count_and_uniqueness(ctx: &mut BoardTestContext) {
        let moves = [
            Move::new(loc(Status::Pending, 1), loc(Status::Completed, 0)),
            Move::new(loc(Status::InProgress, 0), loc(Status::Pending, 5)),
            Move::new(loc(Status::Completed, 1), loc(Status::Completed, 0)),
        ];

        for mv in moves {
            let next = ctx.board.apply_move(&mv).unwrap();
            assert_eq!(next.len(), ctx.board.len());
            for id in ["t1", "t2", "t3", "t4"] {
                let found = next
                    .columns()
                    .flat_map(|(_, tasks)| tasks.iter())
                    .filter(|task| task.id == id)
                    .count();
                assert_eq!(found, 1, "{id} after {mv:?}");
            }
            for (status, tasks) in next.columns() {
                assert!(tasks.iter().all(|task| task.status.column() == Some(status)));
            }
        }
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_destination_past_end_appends(ctx: &mut BoardTestContext) {
        let next = ctx
            .board
            .apply_move(&Move::new(loc(Status::Pending, 0), loc(Status::InProgress, 42)))
            .unwrap();

        assert_eq!(ids(&next, Status::InProgress), vec!["t3", "t1"]);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_source_out_of_range(ctx: &mut BoardTestContext) {
        let result = ctx
            .board
            .apply_move(&Move::new(loc(Status::InProgress, 3), loc(Status::Pending, 0)));

        assert_eq!(
            result,
            Err(BoardError::SourceOutOfRange {
                column: Status::InProgress,
                index: 3,
                len: 1,
            })
        );
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_inverse_move_restores_board(ctx: &mut BoardTestContext) {
        let mv = Move::new(loc(Status::Pending, 0), loc(Status::Completed, 1));
        let moved = ctx.board.apply_move(&mv).unwrap();
        let restored = moved.apply_move(&mv.inverse()).unwrap();

        assert_eq!(restored, ctx.board);
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_locate_and_task_at(ctx: &mut BoardTestContext) {
        let location = ctx.board.locate("t3").unwrap();
        assert_eq!(location, loc(Status::InProgress, 0));
        assert_eq!(ctx.board.task_at(location).unwrap().title, "Review PR");
        assert!(ctx.board.task_at(loc(Status::Completed, 9)).is_none());
        assert!(ctx.board.locate("missing").is_none());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_remove(ctx: &mut BoardTestContext) {
        let (next, removed) = ctx.board.remove(loc(Status::Pending, 1)).unwrap();

        assert_eq!(removed.id, "t2");
        assert_eq!(ids(&next, Status::Pending), vec!["t1"]);
        assert_eq!(next.len(), 3);
        assert!(ctx.board.remove(loc(Status::Completed, 1)).is_err());
    }

    #[test]
    fn test_move_helpers() {
        let mv = Move::new(loc(Status::Pending, 0), loc(Status::Pending, 2));
        assert!(mv.is_reorder());
        assert!(!mv.is_noop());
        assert_eq!(mv.inverse().source, loc(Status::Pending, 2));

        let across = Move::new(loc(Status::Pending, 0), loc(Status::Completed, 0));
        assert!(!across.is_reorder());
    }
}
