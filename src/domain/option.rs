//! 메뉴 옵션 레코드와 콜백 형태.

use std::fmt;
use std::rc::Rc;

use crate::domain::signal::Signal;

pub type CallbackResult = Result<(), Signal>;

type PlainFn<D> = dyn Fn(&mut D) -> CallbackResult;
type KeyedFn<D> = dyn Fn(&mut D, Option<&str>) -> CallbackResult;
type ResponseFn<D> = dyn Fn(&mut D, &str) -> CallbackResult;

/// 옵션 콜백의 호출 형태.
/// lock 옵션은 `Keyed` 형태여야 하며, 형태 불일치는 호출 시 `NotLockCompatible`로 드러난다.
pub enum Callback<D> {
    /// 인자 없는 일반 콜백.
    Plain(Rc<PlainFn<D>>),
    /// 호출한 입력 함수 키를 받는 lock 콜백.
    Keyed(Rc<KeyedFn<D>>),
    /// 입력 함수 자신의 응답 핸들러(와일드카드 응답 수신).
    Response(Rc<ResponseFn<D>>),
}

impl<D> Callback<D> {
    pub fn plain(f: impl Fn(&mut D) -> CallbackResult + 'static) -> Self {
        Self::Plain(Rc::new(f))
    }

    pub fn keyed(f: impl Fn(&mut D, Option<&str>) -> CallbackResult + 'static) -> Self {
        Self::Keyed(Rc::new(f))
    }

    pub fn response(f: impl Fn(&mut D, &str) -> CallbackResult + 'static) -> Self {
        Self::Response(Rc::new(f))
    }

    pub fn accepts_key(&self) -> bool {
        matches!(self, Self::Keyed(_))
    }

    fn shape(&self) -> &'static str {
        match self {
            Self::Plain(_) => "plain",
            Self::Keyed(_) => "keyed",
            Self::Response(_) => "response",
        }
    }
}

impl<D> Clone for Callback<D> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain(f) => Self::Plain(Rc::clone(f)),
            Self::Keyed(f) => Self::Keyed(Rc::clone(f)),
            Self::Response(f) => Self::Response(Rc::clone(f)),
        }
    }
}

impl<D> fmt::Debug for Callback<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback::{}", self.shape())
    }
}

/// 선택 가능한 메뉴 항목 하나.
#[derive(Debug)]
pub struct DemoOption<D> {
    pub name: String,
    pub description: String,
    pub callback: Callback<D>,
    /// 호출 후 원래 입력 함수로 되돌아간다(Retry 신호).
    pub retry: bool,
    /// 콜백이 호출한 입력 함수 키를 받는다.
    pub lock: bool,
    /// 호출 후 빈 줄을 출력한다.
    pub newline: bool,
}

impl<D> DemoOption<D> {
    pub fn new(name: impl Into<String>, callback: Callback<D>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            callback,
            retry: false,
            lock: false,
            newline: false,
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn retry(&mut self, retry: bool) -> &mut Self {
        self.retry = retry;
        self
    }

    pub fn lock(&mut self, lock: bool) -> &mut Self {
        self.lock = lock;
        self
    }

    pub fn newline(&mut self, newline: bool) -> &mut Self {
        self.newline = newline;
        self
    }
}

impl<D> Clone for DemoOption<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            callback: self.callback.clone(),
            retry: self.retry,
            lock: self.lock,
            newline: self.newline,
        }
    }
}
