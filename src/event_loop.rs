use crate::display_servers::DisplayServer;
use crate::manager::Manager;
use crate::utils::command_socket::{self, CommandSocket, IpcStatus};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Multiplexes the X connection and the control socket until the
    /// quit command clears the running flag. Returns the exit code.
    pub async fn event_loop(mut self) -> i32 {
        let socket_file = match place_runtime_file(command_socket::socket_name()) {
            Ok(path) => path,
            Err(err) => {
                log::error!("couldn't place the control socket: {}", err);
                return 1;
            }
        };
        let mut command_socket = match CommandSocket::listen(socket_file).await {
            Ok(socket) => socket,
            Err(err) => {
                log::error!("couldn't create the control socket: {}", err);
                return 1;
            }
        };

        self.state.emit_status();

        let mut event_buffer = vec![];
        while self.state.running {
            self.display_server.flush();

            let mut needs_update = false;
            tokio::select! {
                biased;
                // A socket command is served before pending X events and
                // processed atomically relative to them.
                request = command_socket.next_request(), if event_buffer.is_empty() => {
                    let status = match command_socket::parse_message(&request.data) {
                        Ok(command) => {
                            needs_update = self.command_handler(&command);
                            IpcStatus::None
                        }
                        Err(status) => status,
                    };
                    request.reply(status).await;
                }
                _ = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    event_buffer
                        .drain(..)
                        .for_each(|event| needs_update = self.display_event_handler(event) || needs_update);
                }
            }

            if needs_update {
                self.update_windows();
                self.state.emit_status();
            }

            // Perform whatever the handlers asked of the display server.
            while let Some(act) = self.state.actions.pop_front() {
                self.display_server.execute_action(act);
            }

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.reap();
            }

            if !self.display_server.connection_ok() {
                log::error!("the X connection encountered an error");
                self.state.running = false;
            }
        }

        self.display_server.cleanup();
        self.state.exit_code
    }
}

fn place_runtime_file<P>(path: P) -> std::io::Result<PathBuf>
where
    P: AsRef<Path>,
{
    xdg::BaseDirectories::with_prefix("howm")?.place_runtime_file(path)
}
