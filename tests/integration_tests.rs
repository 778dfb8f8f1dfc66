use multiples_etl::{
    CliConfig, LocalStorage, MultiplesError, MultiplesPipeline, PipelineEngine, ResultEntry,
    ResultSet,
};
use tempfile::TempDir;

fn config_for(input_path: &str, output_path: &str) -> CliConfig {
    CliConfig {
        input_file: input_path.to_string(),
        output_file: output_path.to_string(),
        verbose: false,
    }
}

fn engine_for(
    input_path: &str,
    output_path: &str,
) -> PipelineEngine<MultiplesPipeline<LocalStorage, CliConfig>> {
    let pipeline = MultiplesPipeline::new(LocalStorage::new(), config_for(input_path, output_path));
    PipelineEngine::new(pipeline)
}

#[tokio::test]
async fn test_end_to_end_orders_output_by_multiple_count() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, "3 5 15\n2 2 10\n").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let result = engine.run().await;

    assert!(result.is_ok());
    assert!(output_path.exists());

    // Four multiples sort before six, so the second input line comes first.
    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, "10:2 4 6 8\n15:3 5 6 9 10 12");
}

#[tokio::test]
async fn test_end_to_end_goal_of_one_emits_bare_colon() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, "4 9 1").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, "1:");
}

#[tokio::test]
async fn test_end_to_end_duplicate_goals_stay_separate_entries() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, "5 5 10\n2 3 10\n").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, "10:5\n10:2 3 4 6 8 9");
}

#[tokio::test]
async fn test_invalid_line_leaves_no_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, " 3 5 15\n").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MultiplesError::FormatError { line: 1, .. }));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_zero_value_leaves_no_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, "3 5 0\n").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MultiplesError::RangeError { .. }));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_bad_line_after_good_lines_still_fails_whole_run() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, "3 5 15\n2 2 10\nseven 8 9\n").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MultiplesError::NotNaturalError { line: 3, .. }));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_missing_input_file_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("does_not_exist.txt");
    let output_path = temp_dir.path().join("output.txt");

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MultiplesError::NotFoundError { .. }));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_empty_input_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, "").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MultiplesError::EmptyInputError { .. }));
}

#[tokio::test]
async fn test_non_utf8_input_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, [0xff, 0xfe, 0x33]).unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MultiplesError::EncodingError { .. }));
}

/// Re-parses the output text format back into (goal, multiples) pairs.
fn parse_output(text: &str) -> Vec<ResultEntry> {
    text.lines()
        .map(|line| {
            let (goal, rest) = line.split_once(':').unwrap();
            let multiples = rest
                .split_whitespace()
                .map(|token| token.parse().unwrap())
                .collect();
            ResultEntry {
                goal: goal.parse().unwrap(),
                multiples,
            }
        })
        .collect()
}

#[tokio::test]
async fn test_output_round_trips_through_text_format() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");

    std::fs::write(&input_path, "3 5 15\n2 2 10\n7 11 2\n").unwrap();

    let engine = engine_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    engine.run().await.unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let reparsed = ResultSet {
        entries: parse_output(&written),
    };

    assert_eq!(reparsed.render(), written);
    assert_eq!(
        reparsed.entries,
        vec![
            ResultEntry { goal: 2, multiples: vec![] },
            ResultEntry { goal: 10, multiples: vec![2, 4, 6, 8] },
            ResultEntry { goal: 15, multiples: vec![3, 5, 6, 9, 10, 12] },
        ]
    );
}
