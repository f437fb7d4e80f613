//! AST builders and check helpers shared by the unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;

use idlsema_core::{Category, Document, Field, Program, Requiredness, StructLike, Type};

use crate::{Options, Report, check_all};

pub fn field(id: i32, name: &str) -> Field {
    Field::new(id, name, Type::named("string"))
}

pub fn required(id: i32, name: &str) -> Field {
    field(id, name).with_requiredness(Requiredness::Required)
}

pub fn optional(id: i32, name: &str) -> Field {
    field(id, name).with_requiredness(Requiredness::Optional)
}

pub fn structure(name: &str, fields: impl IntoIterator<Item = Field>) -> StructLike {
    struct_like(Category::Struct, name, fields)
}

pub fn union(name: &str, fields: impl IntoIterator<Item = Field>) -> StructLike {
    struct_like(Category::Union, name, fields)
}

pub fn exception(name: &str, fields: impl IntoIterator<Item = Field>) -> StructLike {
    struct_like(Category::Exception, name, fields)
}

fn struct_like(
    category: Category,
    name: &str,
    fields: impl IntoIterator<Item = Field>,
) -> StructLike {
    fields
        .into_iter()
        .fold(StructLike::new(category, name), StructLike::with_field)
}

/// Run the full checker over a single-document program.
pub fn check(doc: Document) -> (Report, Program) {
    check_with(doc, Options::default())
}

/// Run the full checker in fix mode over a single-document program.
pub fn check_fixed(doc: Document) -> (Report, Program) {
    check_with(doc, Options::default().with_fix_warnings(true))
}

pub fn check_with(doc: Document, options: Options) -> (Report, Program) {
    let mut program = Program::new(doc);
    let report = check_all(&mut program, options);
    (report, program)
}

/// Warning texts of a report, in order.
pub fn messages(report: &Report) -> Vec<&str> {
    report.warnings.messages().collect()
}

/// Shared sink for a test-local `fmt` subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its log lines at `level` and above.
pub fn capture_logs<T>(level: Level, f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap();
    let lines = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect();
    (result, lines)
}
