use std::sync::Once;

use docdash_core::{update, AppState, Effect, FileHandle, Msg, Severity, UploadOutcome};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(docdash_logging::initialize_for_tests);
}

fn files(names: &[&str]) -> Vec<FileHandle> {
    names
        .iter()
        .map(|name| FileHandle::from_path(format!("/tmp/uploads/{name}")))
        .collect()
}

fn upload_effect(effects: &[Effect]) -> (u64, usize, String) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::UploadFile {
                batch_id,
                index,
                file,
            } => Some((*batch_id, *index, file.name.clone())),
            _ => None,
        })
        .expect("upload effect")
}

#[test]
fn unsupported_files_are_filtered_out() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::FilesSelected(files(&["a.pdf", "b.exe", "c.txt"])),
    );
    let (batch_id, index, name) = upload_effect(&effects);
    assert_eq!((index, name.as_str()), (0, "a.pdf"));
    assert_eq!(effects.len(), 1);

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            batch_id,
            index: 0,
            result: Ok(4),
        },
    );
    let (_, index, name) = upload_effect(&effects);
    assert_eq!((index, name.as_str()), (1, "c.txt"));

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            batch_id,
            index: 1,
            result: Ok(2),
        },
    );
    assert_eq!(effects, vec![Effect::RefreshStats]);
    assert_eq!(state.upload().outcomes().len(), 2);
    assert!(!state.upload().is_busy());
}

#[test]
fn empty_selection_notifies_without_requests() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::FilesSelected(files(&["setup.exe", "notes.md"])),
    );

    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::UploadFile { .. } | Effect::RefreshStats)));
    assert!(matches!(effects.as_slice(), [Effect::ScheduleDismiss { .. }]));
    let visible = state.notifications().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].severity, Severity::Error);
    assert_eq!(visible[0].message, "Please select valid files (PDF, DOCX, TXT)");
    assert!(!state.upload().is_busy());
}

#[test]
fn declared_media_type_is_accepted_without_extension() {
    let file = FileHandle {
        name: "report".to_string(),
        media_type: Some("application/pdf".to_string()),
        path: "/tmp/report".into(),
    };
    assert!(file.is_supported());
    assert!(FileHandle::from_path("/tmp/REPORT.DOCX").is_supported());
    assert!(!FileHandle::from_path("/tmp/report.doc").is_supported());
}

#[test]
fn batch_produces_ordered_outcomes_and_reaches_full_progress() {
    init_logging();
    let names = ["one.pdf", "two.docx", "three.txt", "four.pdf"];
    let (mut state, mut effects) = update(AppState::new(), Msg::FilesSelected(files(&names)));

    let mut seen_percents = Vec::new();
    for (i, expected) in names.iter().enumerate() {
        let (batch_id, index, name) = upload_effect(&effects);
        assert_eq!(index, i);
        assert_eq!(&name, expected);

        let view = state.view();
        let progress = view.upload.progress.expect("progress while uploading");
        assert_eq!(progress.status, format!("Uploading {expected}..."));
        seen_percents.push(progress.percent);

        // Odd files fail; the batch must carry on regardless.
        let result = if i % 2 == 1 {
            Err(format!("{expected} rejected"))
        } else {
            Ok(10 + i as u64)
        };
        (state, effects) = update(
            state,
            Msg::UploadFinished {
                batch_id,
                index,
                result,
            },
        );
    }

    assert_eq!(seen_percents, vec![25.0, 50.0, 75.0, 100.0]);
    assert_eq!(effects, vec![Effect::RefreshStats]);

    let outcomes = state.upload().outcomes();
    let order: Vec<_> = outcomes.iter().map(UploadOutcome::filename).collect();
    assert_eq!(order, names);
    assert_eq!(
        outcomes[1],
        UploadOutcome::Failed {
            filename: "two.docx".to_string(),
            error_message: "two.docx rejected".to_string(),
        }
    );

    let view = state.view();
    assert!(view.upload.progress.is_none());
    assert_eq!(view.upload.results.len(), 4);
    assert_eq!(view.upload.results[0].detail, "10 chunks processed");
    assert_eq!(view.upload.results[0].file_type.as_deref(), Some("PDF"));
    assert!(!view.upload.results[1].success);
    assert_eq!(view.upload.results[1].file_type, None);

    // Only successful uploads are logged.
    let activity: Vec<_> = view.activity.iter().map(|a| a.description.as_str()).collect();
    assert_eq!(activity, vec!["Uploaded three.txt", "Uploaded one.pdf"]);
}

#[test]
fn uploads_do_not_touch_document_counts() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::StatsLoaded {
            total_documents: 3,
            total_chunks: 30,
        },
    );
    let (state, effects) = update(state, Msg::FilesSelected(files(&["a.pdf"])));
    let (batch_id, _, _) = upload_effect(&effects);
    let (state, _) = update(
        state,
        Msg::UploadFinished {
            batch_id,
            index: 0,
            result: Ok(12),
        },
    );

    assert_eq!(state.statistics().total_documents(), 3);
    assert_eq!(state.statistics().total_chunks(), 30);

    let (state, _) = update(
        state,
        Msg::StatsLoaded {
            total_documents: 4,
            total_chunks: 42,
        },
    );
    assert_eq!(state.view().header.documents_badge, "4 documents");
    assert_eq!(state.view().header.chunks_badge, "42 chunks");
}

#[test]
fn second_batch_is_rejected_while_busy() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::FilesSelected(files(&["a.pdf"])));
    let (batch_id, _, _) = upload_effect(&effects);

    let (state, effects) = update(state, Msg::FilesSelected(files(&["b.pdf"])));
    assert!(matches!(effects.as_slice(), [Effect::ScheduleDismiss { .. }]));
    assert_eq!(
        state.notifications().visible()[0].severity,
        Severity::Warning
    );

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            batch_id,
            index: 0,
            result: Ok(1),
        },
    );
    assert_eq!(effects, vec![Effect::RefreshStats]);
    assert_eq!(state.upload().outcomes().len(), 1);
}

#[test]
fn unexpected_completion_is_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::FilesSelected(files(&["a.pdf", "b.pdf"])));
    let (batch_id, _, _) = upload_effect(&effects);

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            batch_id,
            index: 1,
            result: Ok(1),
        },
    );
    assert!(effects.is_empty());
    assert!(state.upload().outcomes().is_empty());

    let (state, effects) = update(
        state,
        Msg::UploadFinished {
            batch_id: batch_id + 1,
            index: 0,
            result: Ok(1),
        },
    );
    assert!(effects.is_empty());
    assert!(state.upload().is_busy());
}

#[test]
fn new_batch_clears_previous_results() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::FilesSelected(files(&["a.pdf"])));
    let (batch_id, _, _) = upload_effect(&effects);
    let (state, _) = update(
        state,
        Msg::UploadFinished {
            batch_id,
            index: 0,
            result: Err("Upload failed".to_string()),
        },
    );
    assert_eq!(state.upload().outcomes().len(), 1);

    let (state, effects) = update(state, Msg::FilesSelected(files(&["b.txt"])));
    let (next_batch, _, _) = upload_effect(&effects);
    assert_ne!(next_batch, batch_id);
    assert!(state.upload().outcomes().is_empty());
    assert_eq!(state.view().upload.progress.unwrap().percent_label, "100%");
}
