//! Spawns subprocesses and reaps them when they exit.
use std::collections::HashMap;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<u32, Child>,
}

impl Children {
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn insert(&mut self, child: Child) {
        self.inner.insert(child.id(), child);
    }

    /// Collects every child that has exited. Called when `SIGCHLD` was
    /// flagged, so the wait never blocks.
    pub fn reap(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |ret| ret.is_none()));
    }
}

/// Flags `flag` whenever a child exits, so the event loop knows to reap.
pub fn register_child_hook(flag: Arc<AtomicBool>) {
    let _ = signal_hook::flag::register(signal_hook::consts::signal::SIGCHLD, flag)
        .map_err(|err| log::error!("cannot register SIGCHLD handler: {:?}", err));
}

/// Runs a command vector detached from the manager.
///
/// The child starts its own session so it survives the manager and does
/// not share the X connection's controlling terminal. The parent returns
/// immediately.
pub fn spawn(argv: &[String], children: &mut Children) -> Option<u32> {
    let (program, args) = argv.split_first()?;
    log::info!("spawning command: {}", program);
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null());
    unsafe {
        command.pre_exec(|| {
            nix::unistd::setsid()
                .map(|_| ())
                .map_err(std::io::Error::from)
        });
    }
    match command.spawn() {
        Ok(child) => {
            let pid = child.id();
            children.insert(child);
            Some(pid)
        }
        Err(err) => {
            log::error!("spawn of command {} failed: {}", program, err);
            None
        }
    }
}
