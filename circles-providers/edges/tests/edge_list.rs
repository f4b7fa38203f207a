//! Integration tests covering the edge-list [`FriendshipSource`].
use std::io::Cursor;

use circles_core::{CirclesError, Friendship, FriendshipSource, analyse};
use circles_providers_edges::{EdgeListError, EdgeListProvider};
use rstest::rstest;

#[rstest]
#[case("5\n0 1\n1 2\n", 5, &[(0, 1), (1, 2)])]
#[case("# users\n3\n\n# friendships\n0 2 # cousins\n", 3, &[(0, 2)])]
#[case("4\r\n0 1\r\n2 3\r\n", 4, &[(0, 1), (2, 3)])]
#[case("  7  \n", 7, &[])]
#[case("2\n1\t0", 2, &[(1, 0)])]
fn try_from_reader_parses_records(
    #[case] raw: &str,
    #[case] users: usize,
    #[case] expected: &[(usize, usize)],
) {
    let provider =
        EdgeListProvider::try_from_reader("demo", Cursor::new(raw)).expect("provider must build");
    assert_eq!(provider.user_count(), users);
    let friendships: Vec<Friendship> = expected.iter().copied().map(Friendship::from).collect();
    assert_eq!(provider.friendships(), friendships.as_slice());
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("# only a comment\n")]
fn try_from_reader_requires_a_header(#[case] raw: &str) {
    let err = EdgeListProvider::try_from_reader("demo", Cursor::new(raw))
        .expect_err("missing header must fail");
    assert!(matches!(err, EdgeListError::MissingHeader));
}

#[rstest]
#[case("five\n", 1)]
#[case("# comment\n-3\n", 2)]
#[case("\n4 5\n", 2)]
#[case("+5\n", 1)]
fn try_from_reader_rejects_invalid_header(#[case] raw: &str, #[case] expected_line: usize) {
    let err = EdgeListProvider::try_from_reader("demo", Cursor::new(raw))
        .expect_err("invalid header must fail");
    assert!(matches!(err, EdgeListError::InvalidHeader { line, .. } if line == expected_line));
}

#[rstest]
fn try_from_reader_reports_line_of_malformed_edge() {
    let raw = "3\n0 1\n\n2\n";
    let err = EdgeListProvider::try_from_reader("demo", Cursor::new(raw))
        .expect_err("single token must fail");
    match err {
        EdgeListError::MalformedEdge { line, content } => {
            assert_eq!(line, 4);
            assert_eq!(content, "2");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn try_from_reader_rejects_negative_user_ids() {
    let err = EdgeListProvider::try_from_reader("demo", Cursor::new("3\n0 -1\n"))
        .expect_err("negative ids must fail");
    assert!(matches!(
        err,
        EdgeListError::InvalidUserId { line: 2, ref token } if token == "-1"
    ));
}

#[rstest]
#[case("3\n+1 2\n", "+1")]
#[case("3\n0 +2\n", "+2")]
fn try_from_reader_rejects_signed_user_ids(#[case] raw: &str, #[case] expected: &str) {
    let err = EdgeListProvider::try_from_reader("demo", Cursor::new(raw))
        .expect_err("signed ids must fail");
    assert!(matches!(
        err,
        EdgeListError::InvalidUserId { line: 2, ref token } if token == expected
    ));
}

#[rstest]
fn try_from_reader_reports_line_of_invalid_utf8() {
    let raw: &[u8] = b"3\n0 1\n\xff 2\n";
    let err = EdgeListProvider::try_from_reader("demo", Cursor::new(raw))
        .expect_err("invalid UTF-8 must fail");
    assert!(matches!(err, EdgeListError::InvalidEncoding { line: 3, .. }));
}

#[rstest]
fn try_from_reader_propagates_io_error() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    impl std::io::BufRead for FailingReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    let err = EdgeListProvider::try_from_reader("demo", FailingReader)
        .expect_err("I/O failure must propagate");
    assert!(matches!(err, EdgeListError::Io(_)));
}

#[rstest]
fn analyse_reports_out_of_range_ids_from_file() {
    let provider = EdgeListProvider::try_from_reader("demo", Cursor::new("3\n0 1\n1 3\n"))
        .expect("provider must build");
    let err = analyse(&provider).expect_err("id 3 is outside the universe");
    assert_eq!(err, CirclesError::OutOfRange { id: 3, universe: 3 });
}

#[rstest]
fn analyse_summarises_loaded_friendships() {
    let raw = "6\n0 1\n1 2\n3 4\n0 2\n";
    let provider =
        EdgeListProvider::try_from_reader("demo", Cursor::new(raw)).expect("provider must build");
    let analysis = analyse(&provider).expect("analysis must succeed");
    assert_eq!(analysis.data_source, "demo");
    assert_eq!(analysis.friendships, 4);
    assert_eq!(analysis.merges, 3);
    assert_eq!(analysis.summary.circles, 3);
    assert_eq!(analysis.summary.largest, 3);
    assert_eq!(analysis.summary.smallest, 1);
    assert_eq!(analysis.summary.average, 2);
}
