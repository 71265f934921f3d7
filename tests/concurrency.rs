//! Concurrent use of the text engine.
//!
//! Measurement and wrapping share no state, so many threads can segment,
//! measure and wrap at once and must agree with a single-threaded run.
//!
//! Run with: cargo test --test concurrency -- --nocapture

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use spark_tui_text::{Line, StyledChar, measure, segment, wrap};

const THREADS: usize = 8;
const ROUNDS: usize = 200;

const SAMPLES: &[&str] = &[
    "Hello café สวัสดี مرحبا",
    "cafe\u{301} naïve résumé",
    "พี่พี่พี่พี่พี่พี่พี่พี่พี่พี่พี่พี่",
    "مَرْحَبًا بِالعَالَم",
    "你好世界，こんにちは",
    "a\nb\n\nc\n",
    "",
];

/// What one wrap pass produces, in comparable form.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rendered {
    width: usize,
    lines: Vec<String>,
}

fn render(text: &str, max_width: usize) -> Rendered {
    let chars = segment(text);
    let lines = wrap(chars.clone(), max_width).expect("non-zero width");
    Rendered {
        width: measure(&chars),
        lines: lines.iter().map(Line::text).collect(),
    }
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_thread_safe() {
    assert_send_sync::<StyledChar>();
    assert_send_sync::<Line>();
    assert_send_sync::<spark_tui_text::StyleMap<spark_tui_text::Style>>();
    assert_send_sync::<spark_tui_text::TextError>();
}

#[test]
fn threads_agree_with_single_threaded_run() {
    let expected: Arc<Vec<Rendered>> = Arc::new(
        SAMPLES
            .iter()
            .enumerate()
            .map(|(i, text)| render(text, 3 + i))
            .collect(),
    );

    let (tx, rx): (Sender<usize>, Receiver<usize>) = mpsc::channel();

    let handles: Vec<JoinHandle<()>> = (0..THREADS)
        .map(|t| {
            let tx = tx.clone();
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                let mut checked = 0;
                for round in 0..ROUNDS {
                    let i = (t + round) % SAMPLES.len();
                    assert_eq!(render(SAMPLES[i], 3 + i), expected[i]);
                    checked += 1;
                }
                tx.send(checked).expect("receiver alive");
            })
        })
        .collect();
    drop(tx);

    for handle in handles {
        handle.join().expect("worker panicked");
    }
    let total: usize = rx.iter().sum();
    assert_eq!(total, THREADS * ROUNDS);
}

#[test]
fn shared_units_wrap_identically_across_threads() {
    let chars: Arc<Vec<StyledChar>> = Arc::new(segment(&"สวัสดี你好".repeat(20)));
    let baseline = wrap(chars.iter().cloned(), 7).expect("non-zero width");

    let handles: Vec<JoinHandle<Vec<Line>>> = (0..THREADS)
        .map(|_| {
            let chars = Arc::clone(&chars);
            thread::spawn(move || wrap(chars.iter().cloned(), 7).expect("non-zero width"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), baseline);
    }
}
