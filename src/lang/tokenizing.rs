use crate::{ lang::source_buffer::{ SourceBuffer,
                                    SourceLocation },
             runtime::error };
use std::{ fmt::{ self,
                  Display,
                  Formatter },
           io::BufRead };



/// A token is a run of non-whitespace characters along with the location it was found at.  The
/// language has no string or number syntax at the token level, literals are produced later by the
/// sigil handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token
{
    location: SourceLocation,
    text: String
}


impl Display for Token
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self.text)
    }
}


impl Token
{
    pub fn new(location: SourceLocation, text: String) -> Token
    {
        Token { location, text }
    }

    /// Get the token's location in the original source text.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// The raw text of the token.
    pub fn text(&self) -> &str
    {
        &self.text
    }

    /// The first character of the token, the one sigil dispatch is based on.
    pub fn sigil(&self) -> Option<char>
    {
        self.text.chars().next()
    }

    /// Everything after the sigil character.
    pub fn remainder(&self) -> &str
    {
        match self.sigil()
        {
            Some(sigil) => &self.text[sigil.len_utf8()..],
            None        => ""
        }
    }

    /// Is the token made of nothing but its sigil character?
    pub fn is_bare_sigil(&self) -> bool
    {
        self.sigil().is_some() && self.remainder().is_empty()
    }
}



/// A forward only, non-restartable producer of tokens.  The interpreter keeps a stack of these and
/// always reads from the top one.
pub trait TokenSource
{
    /// The path or descriptive tag of the source, used in locations.
    fn path(&self) -> &str;

    /// Get the next token, or None once the source is exhausted.
    fn next_token(&mut self) -> error::Result<Option<Token>>;
}



fn is_whitespace(next: &char) -> bool
{
    next.is_whitespace()
}


/// Skip whitespace in the buffer, stopping at the first other character or the end of the buffer.
fn skip_whitespace(buffer: &mut SourceBuffer)
{
    while let Some(next) = buffer.peek_next()
    {
        if !is_whitespace(&next)
        {
            break;
        }

        let _ = buffer.next_char();
    }
}


/// Pull text out of the buffer until we hit a whitespace character or run out of buffered text.
fn process_until_whitespace(buffer: &mut SourceBuffer, text: &mut String)
{
    while let Some(next) = buffer.peek_next()
    {
        if is_whitespace(&next)
        {
            break;
        }

        text.push(next);
        let _ = buffer.next_char();
    }
}



/// Token source over a complete in memory string.  Used for the bootstrap program, scripts read
/// from files and tests.
pub struct StringSource
{
    path: String,
    buffer: SourceBuffer
}


impl StringSource
{
    pub fn new(path: &str, source: &str) -> StringSource
    {
        StringSource { path: path.to_string(), buffer: SourceBuffer::from_source(path, source) }
    }
}


impl TokenSource for StringSource
{
    fn path(&self) -> &str
    {
        &self.path
    }

    fn next_token(&mut self) -> error::Result<Option<Token>>
    {
        skip_whitespace(&mut self.buffer);

        if self.buffer.is_empty()
        {
            return Ok(None);
        }

        let location = self.buffer.location().clone();
        let mut text = String::new();

        process_until_whitespace(&mut self.buffer, &mut text);

        Ok(Some(Token::new(location, text)))
    }
}



/// Token source over a buffered reader.  Lines are only read when the buffered text runs out, so an
/// interactive stream is executed as it is typed.
pub struct ReaderSource<R: BufRead>
{
    path: String,
    reader: R,
    buffer: SourceBuffer,
    exhausted: bool
}


impl<R: BufRead> ReaderSource<R>
{
    pub fn new(path: &str, reader: R) -> ReaderSource<R>
    {
        ReaderSource
            {
                path: path.to_string(),
                reader,
                buffer: SourceBuffer::new(path),
                exhausted: false
            }
    }

    /// Read another line into the buffer.  Returns false once the reader has nothing left.
    fn fill(&mut self) -> error::Result<bool>
    {
        if self.exhausted
        {
            return Ok(false);
        }

        let mut line = String::new();

        if self.reader.read_line(&mut line)? == 0
        {
            self.exhausted = true;
            return Ok(false);
        }

        self.buffer.append(&line);
        Ok(true)
    }
}


impl<R: BufRead> TokenSource for ReaderSource<R>
{
    fn path(&self) -> &str
    {
        &self.path
    }

    fn next_token(&mut self) -> error::Result<Option<Token>>
    {
        loop
        {
            skip_whitespace(&mut self.buffer);

            if !self.buffer.is_empty()
            {
                break;
            }

            if !self.fill()?
            {
                return Ok(None);
            }
        }

        let location = self.buffer.location().clone();
        let mut text = String::new();

        // A final line without a trailing new line ends the token at the end of the stream.
        loop
        {
            process_until_whitespace(&mut self.buffer, &mut text);

            if !self.buffer.is_empty() || !self.fill()?
            {
                break;
            }
        }

        Ok(Some(Token::new(location, text)))
    }
}
