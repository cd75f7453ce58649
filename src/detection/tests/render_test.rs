use crate::detection::core::{Detection, Session};
use crate::detection::render::{render_lines, Render, FAILURE_MESSAGE};
use crate::detection::resolver::ResolvedDetection;
use crate::detection::tests::fixture::{image, knowledge_base};
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::knowledge_base::interface::KnowledgeBase;
use crate::prediction_client::interface::PredictionResult;
use std::sync::{Arc, Mutex};

fn resolved(label: &str) -> Session {
    let kb = knowledge_base();
    Session {
        image: Some(image("a.jpg")),
        detection: Detection::Resolved {
            result: PredictionResult::success(label),
            detection: ResolvedDetection {
                display_label: label.to_string(),
                entry: kb.lookup(label).cloned(),
            },
        },
        latest_sequence: 1,
        input_closed: false,
    }
}

#[test]
fn test_idle() {
    assert_eq!(
        render_lines(&Session::default()),
        vec!["Capture from Camera or Select from Gallery"]
    );
}

#[test]
fn test_submitting() {
    let session = Session {
        image: Some(image("a.jpg")),
        detection: Detection::Submitting { sequence: 1 },
        latest_sequence: 1,
        input_closed: false,
    };

    assert_eq!(
        render_lines(&session),
        vec!["Image: /photos/a.jpg", "Detecting machine..."]
    );
}

#[test]
fn test_resolved_with_entry() {
    let lines = render_lines(&resolved("leg press"));

    assert_eq!(lines[0], "Image: /photos/a.jpg");
    assert_eq!(lines[1], "Detected Machine: leg press");
    assert!(lines[2].starts_with("Description: A machine that targets your quadriceps"));
    assert_eq!(lines[3], "Target Muscle: Legs");
    assert_eq!(lines[4], "Famous Exercises:");
    assert_eq!(lines[5], "  - Leg Press");
    assert_eq!(lines[6], "  - Bulgarian Split Squat");
    assert_eq!(lines[7], "  - Walking Lunges");
    assert_eq!(lines[8], "YouTube Tutorials:");
    assert_eq!(lines[9], "  https://www.youtube.com/watch?v=IZxyjW7MPJQ");
    assert_eq!(lines.len(), 12);
}

#[test]
fn test_resolved_without_entry_shows_label_only() {
    let lines = render_lines(&resolved("rowing machine"));

    assert_eq!(
        lines,
        vec!["Image: /photos/a.jpg", "Detected Machine: rowing machine"]
    );
}

#[test]
fn test_failed() {
    let session = Session {
        image: Some(image("a.jpg")),
        detection: Detection::Failed {
            result: PredictionResult::failure("request timed out"),
            error_detail: "request timed out".to_string(),
        },
        latest_sequence: 1,
        input_closed: false,
    };

    let lines = render_lines(&session);

    assert_eq!(
        lines,
        vec![
            "Image: /photos/a.jpg".to_string(),
            FAILURE_MESSAGE.to_string(),
            "(request timed out)".to_string(),
        ]
    );
    assert!(!lines.iter().any(|line| line.starts_with("Detected Machine")));
}

#[test]
fn test_render_writes_to_display() {
    let display = DeviceDisplayFake::new();
    let render = Render::new(Arc::new(Mutex::new(display.clone())));

    render.render(&resolved("treadmill")).unwrap();

    assert_eq!(display.frames().len(), 1);
    assert_eq!(display.last_frame()[1], "Detected Machine: treadmill");
}
