//! Unit tests for command file loading

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use goldcheck::error::GoldenError;
    use goldcheck::operations::loader::{CommandSpec, load_commands};
    use goldcheck::system::MockSystem;
    use std::path::Path;

    #[test]
    fn loads_commands_in_file_order() {
        let system = MockSystem::new()
            .with_file(
                "/suite/test_commands.txt",
                b"echo first\n\tcat   input.txt \nprintf %s\\n x y\n",
            )
            .unwrap();

        let commands = load_commands(&system, Path::new("/suite/test_commands.txt")).unwrap();

        let indexes: Vec<usize> = commands.iter().map(CommandSpec::index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert_eq!(commands[1].tokens(), ["cat", "input.txt"]);
        assert_eq!(commands[2].program(), "printf");
        assert_eq!(commands[2].args(), ["%s\\n", "x", "y"]);
    }

    #[test]
    fn trailing_blank_lines_add_no_commands() {
        let system = MockSystem::new()
            .with_file("/suite/cmds.txt", b"\n\necho a\n\n\n")
            .unwrap();

        let commands = load_commands(&system, Path::new("/suite/cmds.txt")).unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].index(), 1);
        assert_eq!(commands[0].line(), 3);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let system = MockSystem::new();
        let err = load_commands(&system, Path::new("/suite/test_commands.txt")).unwrap_err();

        let golden = err.downcast_ref::<GoldenError>().unwrap();
        assert!(matches!(golden, GoldenError::Load { .. }));
        assert_eq!(golden.exit_code(), 2);
    }

    #[test]
    fn directory_is_not_a_command_file() {
        let system = MockSystem::new().with_dir("/suite/test_commands.txt").unwrap();
        assert!(load_commands(&system, Path::new("/suite/test_commands.txt")).is_err());
    }

    #[test]
    fn invalid_utf8_is_a_load_error() {
        let system = MockSystem::new()
            .with_file("/suite/test_commands.txt", &[0xff, 0xfe, b'\n'])
            .unwrap();
        let err = load_commands(&system, Path::new("/suite/test_commands.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read command file"));
    }
}
