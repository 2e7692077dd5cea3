use std::{ collections::VecDeque,
           fmt::{ self,
                  Display,
                  Formatter } };



/// The location in the source code where a token was found.  Tokens carry their location all the
/// way into the compiled instructions so that errors can point back at the offending text.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Hash)]
pub struct SourceLocation
{
    /// Either the path to the file or a description of the source.  For example the bootstrap
    /// program uses "\<bootstrap\>" and standard input uses "\<stdin\>".
    path: String,

    /// The 1 based line number in the source code where the token was found.
    line: usize,

    /// The 1 based column number in the source code where the token was found.
    column: usize
}


impl Default for SourceLocation
{
    fn default() -> Self
    {
        Self::new()
    }
}


/// Used for error reporting to show where in the source code an error originated.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


impl SourceLocation
{
    /// Create a new SourceLocation with default values.
    pub fn new() -> SourceLocation
    {
        SourceLocation { path: "unspecified".to_string(), line: 1, column: 1 }
    }

    /// Create a new SourceLocation at the start of the given source.
    pub fn new_from_path(path: &str) -> Self
    {
        SourceLocation { path: path.to_owned(), line: 1, column: 1 }
    }

    /// Create a new SourceLocation with all of the needed information.  This is useful in
    /// conjunction with the location_here! macro.
    pub fn new_from_info(path: &str, line: usize, column: usize) -> Self
    {
        SourceLocation { path: path.to_owned(), line, column }
    }

    /// The path to the source code or a meaningful description of the source code.
    pub fn path(&self) -> &String
    {
        &self.path
    }

    /// The 1 based line number in the source code.
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// The 1 based column number in the source code.
    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// Helper macro to get the location of the macro invocation.  Native words are registered with
/// the location of their registration in the Rust source.
#[macro_export]
macro_rules! location_here
{
    () =>
    {
        $crate::lang::source_buffer::SourceLocation::new_from_info(file!(),
                                                                   line!() as usize,
                                                                   column!() as usize)
    };
}



/// A forward only buffer of source characters.  Text can be appended as it becomes available,
/// which lets a reader backed token source feed the buffer one line at a time while the location
/// keeps counting across the appended chunks.
pub struct SourceBuffer
{
    /// Characters that have been appended but not consumed yet.
    chars: VecDeque<char>,

    /// The logical location of the cursor in the source code.
    location: SourceLocation
}


impl SourceBuffer
{
    /// Create an empty buffer for the given path or descriptive tag.
    pub fn new(path: &str) -> Self
    {
        SourceBuffer { chars: VecDeque::new(), location: SourceLocation::new_from_path(path) }
    }

    /// Create a buffer already holding the whole of the source text.
    pub fn from_source(path: &str, source: &str) -> Self
    {
        let mut buffer = SourceBuffer::new(path);

        buffer.append(source);
        buffer
    }

    /// Add more text to the end of the buffer.
    pub fn append(&mut self, text: &str)
    {
        self.chars.extend(text.chars());
    }

    /// The location the cursor is at in the source code being processed.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Is there nothing left to consume?
    pub fn is_empty(&self) -> bool
    {
        self.chars.is_empty()
    }

    /// Take a peek at the next character in the source code without consuming it.
    pub fn peek_next(&self) -> Option<char>
    {
        self.chars.front().copied()
    }

    /// Get and consume the next character in the source code.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = self.chars.pop_front();

        if let Some(next_char) = next
        {
            self.increment_location(next_char);
        }

        next
    }

    /// Advance one column for regular characters.  Reset the column to 1 and increment the line
    /// for new line characters.
    fn increment_location(&mut self, next: char)
    {
        if next == '\n'
        {
            self.location.line += 1;
            self.location.column = 1;
        }
        else
        {
            self.location.column += 1;
        }
    }
}
