// vehiclelab/src/log.rs
// Logger inyectable. Cada vehiculo recibe un Logger al construirse y escribe
// una linea por evento (creacion, movimiento, combustible, recarga).
// Por defecto imprime a consola; se puede redirigir con set_logger(fn(&str)).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::RwLock;

use once_cell::sync::Lazy;

pub type LogFn = fn(&str);

fn default_log(s: &str) {
    println!("{}", s);
}

// funcion de log global del proceso, la que usa Logger::global()
static DEFAULT_LOG: Lazy<RwLock<LogFn>> = Lazy::new(|| RwLock::new(default_log as LogFn));

/// Reemplaza la funcion de log por defecto del proceso.
pub fn set_logger(f: LogFn) {
    *DEFAULT_LOG.write().unwrap_or_else(|e| e.into_inner()) = f;
}

/// Vuelve a imprimir en consola.
pub fn reset_logger() {
    set_logger(default_log);
}

#[inline]
pub fn log_str(s: &str) {
    let f = *DEFAULT_LOG.read().unwrap_or_else(|e| e.into_inner());
    f(s);
}

/// Handle barato de clonar hacia un destino de lineas de log.
#[derive(Clone)]
pub struct Logger {
    sink: Rc<dyn Fn(&str)>,
}

impl Logger {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        Self { sink: Rc::new(f) }
    }

    /// Consulta la funcion global en cada linea, asi set_logger() aplica
    /// tambien a entidades ya creadas.
    pub fn global() -> Self {
        Self::from_fn(log_str)
    }

    pub fn console() -> Self {
        Self::from_fn(default_log)
    }

    /// Reenvia cada linea como evento `info` de tracing.
    pub fn tracing() -> Self {
        Self::from_fn(|line| tracing::info!(target: "vehiclelab", "{}", line))
    }

    pub fn silent() -> Self {
        Self::from_fn(|_| {})
    }

    /// Logger que guarda las lineas en memoria (util en tests).
    pub fn capture() -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        let lines = Rc::clone(&buffer.lines);
        let logger = Self::from_fn(move |line| lines.borrow_mut().push(line.to_string()));
        (logger, buffer)
    }

    #[inline]
    pub fn log(&self, line: &str) {
        (self.sink)(line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Lineas capturadas por `Logger::capture()`.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Rc<RefCell<Vec<String>>>,
}

impl LogBuffer {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

#[macro_export]
macro_rules! lab_log {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.log(&format!($($arg)*));
    }};
}
