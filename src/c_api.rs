// C ABI for host pipelines. Every call locks the one process-wide engine
// for the whole resolution, and nothing is allowed to unwind across it.
use crate::config::Config;
use crate::Normalizer;
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;
use std::sync::{Mutex, MutexGuard};

struct Session {
    engine: Normalizer,
    tables_dir: PathBuf,
}

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

fn lock_session() -> MutexGuard<'static, Option<Session>> {
    SESSION.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

unsafe fn c_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

/// Opens the engine. `tables_dir` may be null to use the configured default.
/// Returns 0 on success, -1 on failure.
#[no_mangle]
pub extern "C" fn norm_engine_init(tables_dir: *const c_char) -> c_int {
    let dir = unsafe { c_str(tables_dir) }.map(PathBuf::from);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut session = lock_session();
        if session.is_some() {
            return 0;
        }
        let mut config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "bad configuration");
                return -1;
            }
        };
        if let Some(dir) = dir {
            config.tables_dir = dir;
        }
        match Normalizer::open(&config) {
            Ok(engine) => {
                *session = Some(Session { engine, tables_dir: config.tables_dir });
                0
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot initialize engine");
                -1
            }
        }
    }));
    result.unwrap_or(-1)
}

/// Saves the learned tables. Returns 0 on success, -1 on failure or if
/// the engine is not initialized.
#[no_mangle]
pub extern "C" fn norm_engine_save() -> c_int {
    let result = catch_unwind(|| {
        let session = lock_session();
        match session.as_ref() {
            Some(s) => match s.engine.save(&s.tables_dir) {
                Ok(()) => 0,
                Err(e) => {
                    tracing::error!(error = %e, "failed to save tables");
                    -1
                }
            },
            None => -1,
        }
    });
    result.unwrap_or(-1)
}

/// Saves and drops the engine.
#[no_mangle]
pub extern "C" fn norm_engine_destroy() {
    let _ = catch_unwind(|| {
        let mut session = lock_session();
        if let Some(s) = session.take() {
            if let Err(e) = s.engine.save(&s.tables_dir) {
                tracing::error!(error = %e, "failed to save tables");
            }
        }
    });
}

/// Returns the norm of `form`, or null on bad input. Free with
/// `norm_free_string`.
#[no_mangle]
pub extern "C" fn norm_normalize(form: *const c_char) -> *mut c_char {
    let Some(form) = (unsafe { c_str(form) }) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut session = lock_session();
        session.as_mut().map(|s| s.engine.normalize(form))
    }));
    match result {
        Ok(Some(norm)) => into_c_string(norm),
        _ => ptr::null_mut(),
    }
}

/// Takes a JSON array of token texts and returns a JSON array of norms of
/// the same length, or null on bad input.
#[no_mangle]
pub extern "C" fn norm_normalize_batch(forms_json: *const c_char) -> *mut c_char {
    let Some(json) = (unsafe { c_str(forms_json) }) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let forms: Vec<String> = serde_json::from_str(json).ok()?;
        let mut session = lock_session();
        let norms = session.as_mut()?.engine.normalize_batch(&forms);
        serde_json::to_string(&norms).ok()
    }));
    match result {
        Ok(Some(json)) => into_c_string(json),
        _ => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn norm_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
