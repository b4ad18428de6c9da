use crate::build_info::BuildMetadata;
use crate::env::ExecEnv;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// In-memory writer whose contents stay readable after it is boxed into an env.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that rejects every write, used to force output failures.
pub(crate) struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }
}

pub(crate) struct TestEnv {
    pub(crate) env: ExecEnv,
    pub(crate) out: SharedBuffer,
    pub(crate) err: SharedBuffer,
}

pub(crate) fn test_env(metadata: Option<BuildMetadata>) -> TestEnv {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let env = ExecEnv::with_writers(metadata, Box::new(out.clone()), Box::new(err.clone()));
    TestEnv { env, out, err }
}

/// Env whose output stream always fails; errors are still captured.
pub(crate) fn failing_env(metadata: Option<BuildMetadata>) -> (ExecEnv, SharedBuffer) {
    let err = SharedBuffer::default();
    let env = ExecEnv::with_writers(metadata, Box::new(FailingWriter), Box::new(err.clone()));
    (env, err)
}
