#![allow(dead_code)]

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};

use libmfekpicker::{
    shell::{PathBuffer, Shell, ShellDialog, ShellItem},
    DialogError, DialogKind, DialogOptions, FileTypeFilter,
};

#[cfg(test)]
pub fn init() {
    use env_logger;
    use std::env;

    env::set_var("RUST_LOG", "DEBUG");
    env_logger::builder().try_init().unwrap_or_default();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Context,
    Dialog,
    Item,
    Buffer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Acquire(Resource),
    Release(Resource),
    Created(DialogKind),
    Options(DialogOptions),
    Title(String),
    FileName(PathBuf),
    FileTypes(Vec<FileTypeFilter>),
    Show,
}

/// What the fake user (or fake platform) does on the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
    Confirm(PathBuf),
    /// Every setter fails, then the user confirms the path anyway.
    FailConfigure(PathBuf),
    Cancel,
    FailInit,
    FailCreate,
    FailShow,
    FailResult,
    FailDisplayName,
}

type Ledger = Rc<RefCell<Vec<Event>>>;

/// A shell that records every acquisition, release and configuration call.
pub struct RecordingShell {
    pub events: Ledger,
    script: RefCell<Vec<Script>>,
}

impl RecordingShell {
    /// Scripts are consumed one per `initialize`, in order.
    pub fn new(scripts: Vec<Script>) -> Self {
        let mut scripts = scripts;
        scripts.reverse();
        RecordingShell {
            events: Rc::new(RefCell::new(Vec::new())),
            script: RefCell::new(scripts),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

pub struct Guard {
    resource: Resource,
    events: Ledger,
}

impl Guard {
    fn acquire(resource: Resource, events: &Ledger) -> Self {
        events.borrow_mut().push(Event::Acquire(resource));
        Guard {
            resource,
            events: events.clone(),
        }
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.events.borrow_mut().push(Event::Release(self.resource));
    }
}

pub struct Context {
    _guard: Guard,
    script: Script,
}

pub struct Dialog {
    _guard: Guard,
    events: Ledger,
    script: Script,
}

pub struct Item {
    _guard: Guard,
    events: Ledger,
    script: Script,
}

pub struct Buffer {
    _guard: Guard,
    path: PathBuf,
}

impl Shell for RecordingShell {
    type Context = Context;
    type Dialog = Dialog;

    fn initialize(&self) -> Result<Context, DialogError> {
        let script = self
            .script
            .borrow_mut()
            .pop()
            .expect("RecordingShell ran out of scripts");
        if script == Script::FailInit {
            return Err(DialogError::DialogUnavailable("init".into()));
        }
        Ok(Context {
            _guard: Guard::acquire(Resource::Context, &self.events),
            script,
        })
    }

    fn create_dialog(&self, context: &Context, kind: DialogKind) -> Result<Dialog, DialogError> {
        if context.script == Script::FailCreate {
            return Err(DialogError::DialogUnavailable("create".into()));
        }
        let guard = Guard::acquire(Resource::Dialog, &self.events);
        self.events.borrow_mut().push(Event::Created(kind));
        Ok(Dialog {
            _guard: guard,
            events: self.events.clone(),
            script: context.script.clone(),
        })
    }
}

impl Dialog {
    fn configured(&self) -> Result<(), DialogError> {
        match self.script {
            Script::FailConfigure(_) => Err(DialogError::DialogUnavailable("configure".into())),
            _ => Ok(()),
        }
    }
}

impl ShellDialog for Dialog {
    type Item = Item;

    fn set_options(&mut self, options: DialogOptions) -> Result<(), DialogError> {
        self.events.borrow_mut().push(Event::Options(options));
        self.configured()
    }

    fn set_title(&mut self, title: &str) -> Result<(), DialogError> {
        self.events.borrow_mut().push(Event::Title(title.to_owned()));
        self.configured()
    }

    fn set_file_name(&mut self, name: &Path) -> Result<(), DialogError> {
        self.events.borrow_mut().push(Event::FileName(name.to_owned()));
        self.configured()
    }

    fn set_file_types(&mut self, filters: &[FileTypeFilter]) -> Result<(), DialogError> {
        self.events.borrow_mut().push(Event::FileTypes(filters.to_vec()));
        self.configured()
    }

    fn show(&mut self) -> Result<(), DialogError> {
        self.events.borrow_mut().push(Event::Show);
        match self.script {
            Script::Cancel => Err(DialogError::UserCancelled),
            Script::FailShow => Err(DialogError::DialogUnavailable("show".into())),
            _ => Ok(()),
        }
    }

    fn result(&self) -> Result<Item, DialogError> {
        if self.script == Script::FailResult {
            return Err(DialogError::ResultUnavailable("result".into()));
        }
        Ok(Item {
            _guard: Guard::acquire(Resource::Item, &self.events),
            events: self.events.clone(),
            script: self.script.clone(),
        })
    }
}

impl ShellItem for Item {
    type Buffer = Buffer;

    fn display_path(&self) -> Result<Buffer, DialogError> {
        match &self.script {
            Script::Confirm(path) | Script::FailConfigure(path) => Ok(Buffer {
                _guard: Guard::acquire(Resource::Buffer, &self.events),
                path: path.clone(),
            }),
            _ => Err(DialogError::ResultUnavailable("display name".into())),
        }
    }
}

impl PathBuffer for Buffer {
    fn to_path_buf(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Asserts that every acquisition in `events` is released exactly once, and
/// that releases happen in reverse acquisition order.
pub fn assert_released_in_reverse(events: &[Event]) {
    let mut held: Vec<Resource> = Vec::new();
    for event in events {
        match event {
            Event::Acquire(r) => {
                assert!(!held.contains(r), "{:?} acquired twice", r);
                held.push(*r);
            }
            Event::Release(r) => {
                assert_eq!(held.pop(), Some(*r), "out-of-order release in {:?}", events);
            }
            _ => {}
        }
    }
    assert!(held.is_empty(), "leaked {:?}", held);
}

pub fn acquired(events: &[Event]) -> Vec<Resource> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Acquire(r) => Some(*r),
            _ => None,
        })
        .collect()
}
