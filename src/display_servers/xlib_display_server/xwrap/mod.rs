//! A wrapper around calls to xlib and X related functions.
use super::xatom::XAtom;
use crate::config::Config;
use crate::errors::{HowmError, Result};
use crate::models::Screen;
use std::ffi::CString;
use std::os::raw::{c_int, c_long, c_ulong};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, Notify};
use tokio::time::Duration;
use x11_dl::xlib;

mod getters;
mod keyboard;
mod setters;
mod window;

pub const ROOT_EVENT_MASK: c_long = xlib::SubstructureRedirectMask
    | xlib::SubstructureNotifyMask
    | xlib::ButtonPressMask
    | xlib::KeyPressMask
    | xlib::PropertyChangeMask;

/// Set by the IO error handler once the connection is beyond saving.
static CONNECTION_OK: AtomicBool = AtomicBool::new(true);

pub struct Colors {
    pub(super) focused: c_ulong,
    pub(super) prev_focused: c_ulong,
    pub(super) unfocused: c_ulong,
    pub(super) urgent: c_ulong,
}

/// Contains the X server connection and everything read through it.
pub struct XWrap {
    pub(super) xlib: xlib::Xlib,
    pub(super) display: *mut xlib::Display,
    pub(super) root: xlib::Window,
    pub atoms: XAtom,
    pub(super) colors: Colors,
    pub(super) focus_mouse: bool,
    _task_guard: oneshot::Receiver<()>,
    pub task_notify: Arc<Notify>,
}

impl XWrap {
    /// Opens the display and starts the readability watcher that wakes
    /// the event loop whenever the connection has data.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    pub fn new() -> Result<Self> {
        const SERVER: mio::Token = mio::Token(0);
        let xlib = xlib::Xlib::open().map_err(|_| HowmError::XConnection)?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(HowmError::XConnection);
        }

        let fd = unsafe { (xlib.XConnectionNumber)(display) };

        let (guard, _task_guard) = oneshot::channel();
        let notify = Arc::new(Notify::new());
        let task_notify = notify.clone();

        let mut poll = mio::Poll::new()?;
        let mut events = mio::Events::with_capacity(1);
        poll.registry()
            .register(&mut mio::unix::SourceFd(&fd), SERVER, mio::Interest::READABLE)?;
        let timeout = Duration::from_millis(100);
        tokio::task::spawn_blocking(move || loop {
            if guard.is_closed() {
                return;
            }
            if let Err(err) = poll.poll(&mut events, Some(timeout)) {
                log::warn!("xlib socket poll failed with {:?}", err);
                continue;
            }
            events
                .iter()
                .filter(|event| SERVER == event.token())
                .for_each(|_| notify.notify_one());
        });

        let atoms = XAtom::new(&xlib, display);
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };

        Ok(Self {
            xlib,
            display,
            root,
            atoms,
            colors: Colors {
                focused: 0,
                prev_focused: 0,
                unfocused: 0,
                urgent: 0,
            },
            focus_mouse: true,
            _task_guard,
            task_notify,
        })
    }

    /// Claims the root window, grabs the keys and advertises EWMH
    /// support. Exits when another window manager is already running.
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn init(&mut self, config: &Config) {
        extern "C" fn startup_check_for_other_wm(
            _: *mut xlib::Display,
            _: *mut xlib::XErrorEvent,
        ) -> c_int {
            eprintln!("ERROR: another window manager is already running");
            std::process::exit(1);
        }
        unsafe {
            (self.xlib.XSetErrorHandler)(Some(startup_check_for_other_wm));
            (self.xlib.XSelectInput)(self.display, self.root, ROOT_EVENT_MASK);
        }
        self.sync();

        extern "C" fn on_error_from_xlib(
            _: *mut xlib::Display,
            er: *mut xlib::XErrorEvent,
        ) -> c_int {
            let err = unsafe { *er };
            // Bad window errors are expected when clients vanish.
            if err.error_code == xlib::BadWindow {
                return 0;
            }
            log::warn!("xlib error: request {} code {}", err.request_code, err.error_code);
            0
        }
        extern "C" fn on_io_error_from_xlib(_: *mut xlib::Display) -> c_int {
            CONNECTION_OK.store(false, Ordering::SeqCst);
            log::error!("the X connection encountered an error");
            0
        }
        unsafe {
            (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib));
            (self.xlib.XSetIOErrorHandler)(Some(on_io_error_from_xlib));
        }

        self.focus_mouse = config.focus_mouse;
        self.load_colors(config);
        self.init_ewmh(config);
        self.reset_grabs(config);
        self.sync();
    }

    /// Advertises the supported atoms and the desktop hints used by
    /// pagers and bars.
    fn init_ewmh(&self, config: &Config) {
        let supported: Vec<c_long> = self
            .atoms
            .net_supported()
            .iter()
            .map(|&atom| atom as c_long)
            .collect();
        self.replace_property_long(self.root, self.atoms.NetSupported, xlib::XA_ATOM, &supported);
        self.replace_property_long(
            self.root,
            self.atoms.NetSupportingWmCheck,
            xlib::XA_WINDOW,
            &[self.root as c_long],
        );
        self.set_utf8_property(self.root, self.atoms.NetWMName, "howm");
        self.replace_property_long(
            self.root,
            self.atoms.NetDesktopViewport,
            xlib::XA_CARDINAL,
            &[0, 0],
        );
        self.replace_property_long(
            self.root,
            self.atoms.NetNumberOfDesktops,
            xlib::XA_CARDINAL,
            &[config.workspaces as c_long],
        );
        self.set_current_desktop(config.default_workspace - 1);
        let screen = self.screen();
        self.replace_property_long(
            self.root,
            self.atoms.NetDesktopGeometry,
            xlib::XA_CARDINAL,
            &[screen.width as c_long, screen.height as c_long],
        );
        self.set_workarea(screen.drawable(config.bar_height, config.bar_bottom));
    }

    fn load_colors(&mut self, config: &Config) {
        self.colors = Colors {
            focused: self.get_color(&config.border_focus),
            prev_focused: self.get_color(&config.border_prev_focus),
            unfocused: self.get_color(&config.border_unfocus),
            urgent: self.get_color(&config.border_urgent),
        };
    }

    /// Resolves a colour name to a pixel, leaving it black on failure.
    // `XAllocNamedColor`: https://tronche.com/gui/x/xlib/color/XAllocNamedColor.html
    fn get_color(&self, color: &str) -> c_ulong {
        let screen_id = unsafe { (self.xlib.XDefaultScreen)(self.display) };
        let cmap = unsafe { (self.xlib.XDefaultColormap)(self.display, screen_id) };
        let color_cstr = CString::new(color).unwrap_or_default().into_raw();
        let mut color_def_screen: xlib::XColor = unsafe { std::mem::zeroed() };
        let mut color_def_exact: xlib::XColor = unsafe { std::mem::zeroed() };
        unsafe {
            let status = (self.xlib.XAllocNamedColor)(
                self.display,
                cmap,
                color_cstr,
                &mut color_def_screen,
                &mut color_def_exact,
            );
            if status == 0 {
                log::warn!("cannot allocate the colour {}", color);
                return 0;
            }
        }
        color_def_screen.pixel
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        let screen_id = unsafe { (self.xlib.XDefaultScreen)(self.display) };
        let width = unsafe { (self.xlib.XDisplayWidth)(self.display, screen_id) };
        let height = unsafe { (self.xlib.XDisplayHeight)(self.display, screen_id) };
        Screen::new(width as u32, height as u32)
    }

    #[must_use]
    pub fn root(&self) -> xlib::Window {
        self.root
    }

    #[must_use]
    pub fn connection_ok(&self) -> bool {
        CONNECTION_OK.load(Ordering::SeqCst)
    }

    /// How many events are waiting without blocking.
    // `XPending`: https://tronche.com/gui/x/xlib/event-handling/XPending.html
    #[must_use]
    pub fn queue_len(&self) -> i32 {
        unsafe { (self.xlib.XPending)(self.display) }
    }

    pub fn get_next_event(&self) -> xlib::XEvent {
        let mut event: xlib::XEvent = unsafe { std::mem::zeroed() };
        unsafe {
            (self.xlib.XNextEvent)(self.display, &mut event);
        }
        event
    }

    pub fn flush(&self) {
        unsafe {
            (self.xlib.XFlush)(self.display);
        }
    }

    pub fn sync(&self) {
        unsafe {
            (self.xlib.XSync)(self.display, xlib::False);
        }
    }

    /// Politely closes every remaining window, releases the grabs and
    /// hands the input focus back to the root.
    pub fn cleanup(&self) {
        log::warn!("cleaning up");
        self.ungrab_all_keys();
        for window in self.get_all_windows() {
            self.send_delete(window);
        }
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                self.root,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
            (self.xlib.XSelectInput)(self.display, self.root, xlib::NoEventMask);
        }
        self.flush();
    }
}
