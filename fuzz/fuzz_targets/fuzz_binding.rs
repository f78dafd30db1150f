//! Fuzz target for binding notifications.
//!
//! Drives a binding with arbitrary local and remote edits and checks that the
//! model and surface agree after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use text_diff_binding::{Edit, MemorySurface, RopeModel, Selection, TextDiffBinding, TextSurface};

#[derive(Arbitrary, Debug)]
enum Step {
    Type { text: String, caret: u8 },
    RemoteInsert { position: u8, text: String },
    RemoteRemove { position: u8, len: u8 },
    Select { start: Option<u8>, end: Option<u8> },
    Refresh,
}

fuzz_target!(|steps: Vec<Step>| {
    let mut binding = TextDiffBinding::new(RopeModel::new(), MemorySurface::new());

    for step in steps {
        match step {
            Step::Type { text, caret } => {
                // Surfaces may report CR-LF, but never lone CRs.
                let text = text.replace('\r', "").replace('\n', "\r\n");
                binding.surface_mut().type_text(&text, usize::from(caret));
                let _ = binding.on_input();
            }
            Step::RemoteInsert { position, text } => {
                let position = usize::from(position).min(binding.model().len_chars());
                let text = text.replace('\r', "");
                let _ = binding.apply_remote(&Edit::Insert { position, text });
            }
            Step::RemoteRemove { position, len } => {
                let model = binding.model().to_string();
                let start = usize::from(position).min(model.chars().count());
                let text: String = model.chars().skip(start).take(usize::from(len)).collect();
                let _ = binding.apply_remote(&Edit::Remove {
                    position: start,
                    text,
                });
            }
            Step::Select { start, end } => {
                binding.surface_mut().set_selection(Selection {
                    start: start.map(usize::from),
                    end: end.map(usize::from),
                });
            }
            Step::Refresh => {
                let _ = binding.refresh();
            }
        }

        assert_eq!(binding.surface_text(), binding.model().to_string());
        assert_eq!(binding.refresh().ok(), Some(false));
    }
});
