use std::{ cell::RefCell,
           io::{ self,
                 Write },
           rc::Rc };



/// Receives the text printed by `.` and `dbg`, one rendered line per call.
pub trait OutputSink
{
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}


/// Print to the process's standard output.
pub struct StdoutSink;


impl OutputSink for StdoutSink
{
    fn write_line(&mut self, text: &str) -> io::Result<()>
    {
        let mut stdout = io::stdout().lock();

        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }
}


/// Collects printed lines in memory.  Clones share the same buffer, so a caller can hand one clone
/// to the interpreter and read the lines back through another.
#[derive(Clone, Default)]
pub struct CapturedOutput
{
    lines: Rc<RefCell<Vec<String>>>
}


impl CapturedOutput
{
    pub fn new() -> CapturedOutput
    {
        CapturedOutput::default()
    }

    /// A copy of everything printed so far.
    pub fn lines(&self) -> Vec<String>
    {
        self.lines.borrow().clone()
    }

    /// Remove and return everything printed so far.
    pub fn take(&self) -> Vec<String>
    {
        self.lines.borrow_mut().drain(..).collect()
    }
}


impl OutputSink for CapturedOutput
{
    fn write_line(&mut self, text: &str) -> io::Result<()>
    {
        self.lines.borrow_mut().push(text.to_string());
        Ok(())
    }
}
