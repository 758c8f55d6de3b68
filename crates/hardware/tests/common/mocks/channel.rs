use std::io;

use mockall::mock;
use rv32sim_core::soc::host::HostChannel;

mock! {
    pub Channel {}

    impl HostChannel for Channel {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
        fn write(&mut self, byte: u8) -> io::Result<()>;
    }
}

impl MockChannel {
    /// A channel that never has input and accepts any output.
    pub fn idle() -> Self {
        let mut chan = Self::new();
        let _ = chan
            .expect_read()
            .returning(|_| Err(io::ErrorKind::WouldBlock.into()));
        let _ = chan.expect_write().returning(|_| Ok(()));
        chan
    }
}
