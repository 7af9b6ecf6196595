//! Sends a command to a running howm instance.
//!
//! Arguments are passed through as the null-separated socket grammar,
//! e.g. `howm-ipc change_ws 2` or `howm-ipc op_kill 3 c`. The integer
//! status reply is printed and becomes the exit code.
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::process::exit;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: howm-ipc <command> [args...]");
        exit(2);
    }

    let socket_file = match xdg::BaseDirectories::with_prefix("howm")
        .ok()
        .and_then(|base| base.find_runtime_file(howm::socket_name()))
    {
        Some(path) => path,
        None => {
            eprintln!("howm does not appear to be running");
            exit(2);
        }
    };

    let mut message = Vec::new();
    for arg in &args {
        message.extend_from_slice(arg.as_bytes());
        message.push(0);
    }

    let mut stream = match UnixStream::connect(&socket_file) {
        Ok(stream) => stream,
        Err(err) => {
            eprintln!("couldn't connect to {}: {}", socket_file.display(), err);
            exit(2);
        }
    };
    if let Err(err) = stream.write_all(&message) {
        eprintln!("couldn't send the command: {}", err);
        exit(2);
    }

    let mut raw = [0_u8; 4];
    match stream.read_exact(&mut raw) {
        Ok(()) => {
            let status = i32::from_ne_bytes(raw);
            println!("{}", status);
            exit(i32::from(status != 0));
        }
        Err(err) => {
            eprintln!("no response: {}", err);
            exit(2);
        }
    }
}
