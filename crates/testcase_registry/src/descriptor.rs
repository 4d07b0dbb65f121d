use crate::completion::Completion;

/// The body of a test.  Each call starts a fresh run.
pub type TestBody = fn() -> Completion;

/// One registered test.
///
/// Descriptors are built in const context by the declaration macros and live for the rest of the process.  Nothing
/// mutates them once they are registered.
#[derive(Debug, derive_more::Display)]
#[display(fmt = "{} (registered at {}:{}:{})", name, file, line, column)]
pub struct TestDescriptor {
    name: &'static str,
    file: &'static str,
    line: u32,
    column: u32,
    body: TestBody,
}

inventory::collect!(TestDescriptor);

impl TestDescriptor {
    pub const fn new(
        name: &'static str,
        file: &'static str,
        line: u32,
        column: u32,
        body: TestBody,
    ) -> Self {
        Self {
            name,
            file,
            line,
            column,
            body,
        }
    }

    /// The name the test was declared with.
    ///
    /// Conventionally a `/`-separated path such as `product/module/case`, but this is not enforced and names need not
    /// be unique.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// File of the declaration, as reported by `file!()`.
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn body(&self) -> TestBody {
        self.body
    }

    /// Start a run of this test, returning its completion.
    pub fn start(&self) -> Completion {
        (self.body)()
    }

    /// Key used to put descriptors into source order.
    pub(crate) fn source_order_key(&self) -> (&'static str, u32, u32) {
        (self.file, self.line, self.column)
    }
}
