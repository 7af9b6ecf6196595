//! The control socket and its request grammar.
//!
//! A request is one read's worth of null-terminated byte strings: the
//! command name first, then its arguments. The reply is a single
//! machine-order integer status, after which the connection is closed.
use crate::command::Command;
use crate::errors::Result;
use crate::models::{Motion, Operator};
use std::env;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};

/// Requests larger than this are truncated at the read.
pub const IPC_BUF_SIZE: usize = 1024;

/// The integer statuses returned to the socket client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum IpcStatus {
    None = 0,
    Syntax = 1,
    Alloc = 2,
    NoCmd = 3,
    TooManyArgs = 4,
    TooFewArgs = 5,
    ArgNotInt = 6,
    ArgTooLarge = 7,
}

/// Where the socket lives for the current display.
#[must_use]
pub fn socket_name() -> PathBuf {
    let display = env::var("DISPLAY")
        .ok()
        .and_then(|d| d.rsplit_once(':').map(|(_, r)| r.to_owned()))
        .unwrap_or_else(|| "0".to_owned());
    PathBuf::from(format!("howm-{}.sock", display))
}

/// Listens on a UNIX stream socket for commands, one connection at a time.
#[derive(Debug)]
pub struct CommandSocket {
    listener: UnixListener,
    socket_file: PathBuf,
}

impl Drop for CommandSocket {
    fn drop(&mut self) {
        std::fs::remove_file(&self.socket_file).ok();
    }
}

impl CommandSocket {
    /// Binds the socket, replacing a stale file from a previous run.
    pub async fn listen(socket_file: PathBuf) -> Result<Self> {
        let listener = match UnixListener::bind(&socket_file) {
            Ok(listener) => listener,
            Err(_) => {
                fs::remove_file(&socket_file).await?;
                UnixListener::bind(&socket_file)?
            }
        };
        Ok(Self {
            listener,
            socket_file,
        })
    }

    /// Accepts one connection and reads its request.
    pub async fn next_request(&mut self) -> IpcRequest {
        loop {
            match self.listener.accept().await {
                Ok((mut stream, _)) => {
                    let mut buf = vec![0_u8; IPC_BUF_SIZE];
                    match stream.read(&mut buf).await {
                        Ok(n) => {
                            buf.truncate(n);
                            return IpcRequest { stream, data: buf };
                        }
                        Err(err) => log::error!("socket read failed: {}", err),
                    }
                }
                Err(err) => log::error!("accept failed: {}", err),
            }
        }
    }
}

/// One accepted connection, answered with an integer status.
#[derive(Debug)]
pub struct IpcRequest {
    stream: UnixStream,
    pub data: Vec<u8>,
}

impl IpcRequest {
    pub async fn reply(mut self, status: IpcStatus) {
        let raw = (status as i32).to_ne_bytes();
        if let Err(err) = self.stream.write_all(&raw).await {
            log::error!("unable to send socket response: {}", err);
        }
    }
}

/// Parses one request into a command, or the status describing why not.
pub fn parse_message(data: &[u8]) -> std::result::Result<Command, IpcStatus> {
    let args = split_args(data)?;
    let name = args.first().copied().ok_or(IpcStatus::TooFewArgs)?;
    match name {
        "resize_master" => Ok(Command::ResizeMaster(one_int(&args)?)),
        "change_layout" => Ok(Command::ChangeLayout(one_int(&args)?)),
        "next_layout" => no_args(&args, Command::NextLayout),
        "previous_layout" => no_args(&args, Command::PreviousLayout),
        "last_layout" => no_args(&args, Command::LastLayout),
        "change_mode" => Ok(Command::ChangeMode(one_int(&args)?)),
        "toggle_float" => no_args(&args, Command::ToggleFloat),
        "toggle_fullscreen" => no_args(&args, Command::ToggleFullscreen),
        "toggle_bar" => no_args(&args, Command::ToggleBar),
        "quit_howm" => Ok(Command::Quit(one_int(&args)?)),
        "replay" => no_args(&args, Command::Replay),
        "paste" => no_args(&args, Command::Paste),
        "send_to_scratchpad" => no_args(&args, Command::SendToScratchpad),
        "get_from_scratchpad" => no_args(&args, Command::GetFromScratchpad),
        "resize_float_width" => Ok(Command::ResizeFloatWidth(one_int(&args)?)),
        "resize_float_height" => Ok(Command::ResizeFloatHeight(one_int(&args)?)),
        "move_float_x" => Ok(Command::MoveFloatX(one_int(&args)?)),
        "move_float_y" => Ok(Command::MoveFloatY(one_int(&args)?)),
        "teleport_client" => Ok(Command::TeleportClient(one_int(&args)?)),
        "focus_urgent" => no_args(&args, Command::FocusUrgent),
        "focus_next_client" => no_args(&args, Command::FocusNextClient),
        "focus_prev_client" => no_args(&args, Command::FocusPrevClient),
        "move_current_up" => no_args(&args, Command::MoveCurrentUp),
        "move_current_down" => no_args(&args, Command::MoveCurrentDown),
        "focus_last_ws" => no_args(&args, Command::FocusLastWs),
        "focus_next_ws" => no_args(&args, Command::FocusNextWs),
        "focus_prev_ws" => no_args(&args, Command::FocusPrevWs),
        "make_master" => no_args(&args, Command::MakeMaster),
        "change_ws" => Ok(Command::ChangeWs(one_int(&args)?)),
        "current_to_ws" => Ok(Command::CurrentToWs(one_int(&args)?)),
        "spawn" => command_vector(&args),
        "op_kill" => operator_args(&args, Operator::Kill),
        "op_move_up" => operator_args(&args, Operator::MoveUp),
        "op_move_down" => operator_args(&args, Operator::MoveDown),
        "op_focus_up" => operator_args(&args, Operator::FocusUp),
        "op_focus_down" => operator_args(&args, Operator::FocusDown),
        "op_shrink_gaps" => operator_args(&args, Operator::ShrinkGaps),
        "op_grow_gaps" => operator_args(&args, Operator::GrowGaps),
        "op_cut" => operator_args(&args, Operator::Cut),
        _ => Err(IpcStatus::NoCmd),
    }
}

/// Collects the null-terminated strings of a request. A trailing
/// fragment without a terminator is not counted.
fn split_args(data: &[u8]) -> std::result::Result<Vec<&str>, IpcStatus> {
    let mut args = Vec::new();
    let mut rest = data;
    while let Some(end) = rest.iter().position(|&b| b == 0) {
        let arg = std::str::from_utf8(&rest[..end]).map_err(|_| IpcStatus::Syntax)?;
        args.push(arg);
        rest = &rest[end + 1..];
    }
    if args.is_empty() {
        return Err(IpcStatus::TooFewArgs);
    }
    Ok(args)
}

fn no_args(args: &[&str], command: Command) -> std::result::Result<Command, IpcStatus> {
    if args.len() > 1 {
        return Err(IpcStatus::TooManyArgs);
    }
    Ok(command)
}

fn one_int(args: &[&str]) -> std::result::Result<i32, IpcStatus> {
    match args.len() {
        0 | 1 => Err(IpcStatus::TooFewArgs),
        2 => parse_int(args[1]),
        _ => Err(IpcStatus::TooManyArgs),
    }
}

fn command_vector(args: &[&str]) -> std::result::Result<Command, IpcStatus> {
    if args.len() < 2 {
        return Err(IpcStatus::TooFewArgs);
    }
    Ok(Command::Spawn(
        args[1..].iter().map(ToString::to_string).collect(),
    ))
}

/// Operator commands take a count and a single character selecting the
/// motion: 'w' for workspaces, 'c' for clients.
fn operator_args(args: &[&str], op: Operator) -> std::result::Result<Command, IpcStatus> {
    match args.len() {
        0..=2 => Err(IpcStatus::TooFewArgs),
        3 => {
            let count = parse_int(args[1])?;
            let motion = match args[2] {
                "w" => Motion::Workspace,
                "c" => Motion::Client,
                _ => return Err(IpcStatus::Syntax),
            };
            Ok(Command::RunOperator { op, motion, count })
        }
        _ => Err(IpcStatus::TooManyArgs),
    }
}

/// A one- or two-digit decimal with an optional leading minus.
fn parse_int(arg: &str) -> std::result::Result<i32, IpcStatus> {
    let (sign, digits) = match arg.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, arg),
    };
    if digits.is_empty() {
        return Err(IpcStatus::ArgNotInt);
    }
    if digits.len() > 2 {
        return Err(IpcStatus::ArgTooLarge);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IpcStatus::ArgNotInt);
    }
    if digits.len() == 2 && digits.starts_with('0') {
        return Err(IpcStatus::ArgNotInt);
    }
    Ok(sign * digits.parse::<i32>().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(parts: &[&str]) -> Vec<u8> {
        let mut out = Vec::new();
        for p in parts {
            out.extend_from_slice(p.as_bytes());
            out.push(0);
        }
        out
    }

    #[test]
    fn parses_a_plain_command() {
        assert_eq!(parse_message(&msg(&["paste"])), Ok(Command::Paste));
    }

    #[test]
    fn parses_an_integer_argument() {
        assert_eq!(
            parse_message(&msg(&["change_ws", "2"])),
            Ok(Command::ChangeWs(2))
        );
        assert_eq!(
            parse_message(&msg(&["resize_master", "-5"])),
            Ok(Command::ResizeMaster(-5))
        );
    }

    #[test]
    fn parses_an_operator_invocation() {
        assert_eq!(
            parse_message(&msg(&["op_kill", "3", "c"])),
            Ok(Command::RunOperator {
                op: Operator::Kill,
                motion: Motion::Client,
                count: 3
            })
        );
        assert_eq!(
            parse_message(&msg(&["op_cut", "2", "w"])),
            Ok(Command::RunOperator {
                op: Operator::Cut,
                motion: Motion::Workspace,
                count: 2
            })
        );
    }

    #[test]
    fn bad_motion_selector_is_a_syntax_error() {
        assert_eq!(
            parse_message(&msg(&["op_kill", "3", "x"])),
            Err(IpcStatus::Syntax)
        );
    }

    #[test]
    fn unknown_command_names_yield_no_cmd() {
        assert_eq!(parse_message(&msg(&["frobnicate"])), Err(IpcStatus::NoCmd));
    }

    #[test]
    fn missing_arguments_yield_too_few_args() {
        assert_eq!(parse_message(&msg(&["change_ws"])), Err(IpcStatus::TooFewArgs));
        assert_eq!(parse_message(&[]), Err(IpcStatus::TooFewArgs));
    }

    #[test]
    fn excess_arguments_yield_too_many_args() {
        assert_eq!(
            parse_message(&msg(&["paste", "1"])),
            Err(IpcStatus::TooManyArgs)
        );
    }

    #[test]
    fn spawn_takes_the_whole_remainder() {
        assert_eq!(
            parse_message(&msg(&["spawn", "xterm", "-e", "top"])),
            Ok(Command::Spawn(vec![
                "xterm".to_owned(),
                "-e".to_owned(),
                "top".to_owned()
            ]))
        );
    }

    #[test]
    fn three_digit_integers_are_too_large() {
        assert_eq!(
            parse_message(&msg(&["change_ws", "100"])),
            Err(IpcStatus::ArgTooLarge)
        );
    }

    #[test]
    fn non_numeric_arguments_are_not_int() {
        assert_eq!(
            parse_message(&msg(&["change_ws", "two"])),
            Err(IpcStatus::ArgNotInt)
        );
        assert_eq!(
            parse_message(&msg(&["change_ws", "-"])),
            Err(IpcStatus::ArgNotInt)
        );
    }

    #[test]
    fn unterminated_trailing_bytes_are_ignored() {
        let mut raw = msg(&["change_ws"]);
        raw.extend_from_slice(b"2");
        assert_eq!(parse_message(&raw), Err(IpcStatus::TooFewArgs));
    }

    #[tokio::test]
    async fn socket_round_trip_returns_a_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("howm-test.sock");
        let mut socket = CommandSocket::listen(path.clone()).await.unwrap();

        let client = tokio::spawn(async move {
            let mut stream = UnixStream::connect(path).await.unwrap();
            stream.write_all(b"no_such_command\0").await.unwrap();
            let mut raw = [0_u8; 4];
            stream.read_exact(&mut raw).await.unwrap();
            i32::from_ne_bytes(raw)
        });

        let request = socket.next_request().await;
        let status = match parse_message(&request.data) {
            Ok(_) => IpcStatus::None,
            Err(status) => status,
        };
        request.reply(status).await;

        assert_eq!(client.await.unwrap(), IpcStatus::NoCmd as i32);
    }

    #[tokio::test]
    async fn stale_socket_files_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("howm-stale.sock");
        let first = CommandSocket::listen(path.clone()).await.unwrap();
        // Leak the first socket so its file stays behind, as it would
        // after a crash.
        std::mem::forget(first);
        let second = CommandSocket::listen(path.clone()).await;
        assert!(second.is_ok(), "stale socket file was not replaced");
    }
}
