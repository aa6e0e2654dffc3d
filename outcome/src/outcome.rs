//! The full two-alternative form: success and failure both carry a payload.

/// Holds exactly one of a success payload `T` or a failure payload `E`.
///
/// The live alternative is fixed at construction and only changes when the
/// whole value is overwritten. Copying or moving an `Outcome` copies or moves
/// whichever payload is live, and dropping it drops exactly that payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The success alternative.
    Ok(T),
    /// The failure alternative.
    Err(E),
}

impl<T, E> core::fmt::Debug for Outcome<T, E>
where
    T: core::fmt::Debug,
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl<T, E> From<core::result::Result<T, E>> for Outcome<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(value) => Self::Err(value),
        }
    }
}
impl<T, E> From<Outcome<T, E>> for core::result::Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.match_owned(Ok, Err)
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the success alternative is live.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
    /// Returns `true` if the failure alternative is live.
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }
    /// Equivalent to `match &self`.
    pub fn match_ref<'a, U, FnOk: FnOnce(&'a T) -> U, FnErr: FnOnce(&'a E) -> U>(
        &'a self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut<'a, U, FnOk: FnOnce(&'a mut T) -> U, FnErr: FnOnce(&'a mut E) -> U>(
        &'a mut self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }
    /// Equivalent to `match self`.
    pub fn match_owned<U, FnOk: FnOnce(T) -> U, FnErr: FnOnce(E) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }
    /// Converts to a standard [`Result`](core::result::Result) of immutable references.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_ref(&self) -> core::result::Result<&T, &E> {
        self.match_ref(Ok, Err)
    }
    /// Converts to a standard [`Result`](core::result::Result) of mutable references.
    #[allow(clippy::missing_errors_doc)]
    pub fn as_mut(&mut self) -> core::result::Result<&mut T, &mut E> {
        self.match_mut(Ok, Err)
    }
    /// Returns a reference to the success payload.
    ///
    /// Callers are expected to have checked [`Self::is_ok`] first.
    ///
    /// # Panics
    /// If the failure alternative is live.
    pub fn ok_value(&self) -> &T {
        self.match_ref(
            |value| value,
            |_| panic!("Outcome::ok_value called on the Err alternative"),
        )
    }
    /// Returns a mutable reference to the success payload.
    ///
    /// # Panics
    /// If the failure alternative is live.
    pub fn ok_value_mut(&mut self) -> &mut T {
        self.match_mut(
            |value| value,
            |_| panic!("Outcome::ok_value_mut called on the Err alternative"),
        )
    }
    /// Consumes the outcome, returning the owned success payload.
    ///
    /// Taking `self` by value makes reuse of the consumed outcome a compile
    /// error rather than a moved-from state (for `Copy` payloads the reuse is
    /// harmless, as the consumed copy is independent of the source):
    ///
    /// ```compile_fail
    /// use outcome::Outcome;
    /// let o: Outcome<String, ()> = Outcome::Ok(String::from("one"));
    /// let value = o.into_ok();
    /// o.is_ok(); // `o` was consumed above
    /// ```
    ///
    /// # Panics
    /// If the failure alternative is live.
    pub fn into_ok(self) -> T
    where
        E: core::fmt::Debug,
    {
        self.match_owned(
            |value| value,
            |e| panic!("Outcome::into_ok called on the Err alternative: {e:?}"),
        )
    }
    /// Returns a reference to the failure payload.
    ///
    /// Callers are expected to have checked [`Self::is_error`] first.
    ///
    /// # Panics
    /// If the success alternative is live.
    pub fn error_value(&self) -> &E {
        self.match_ref(
            |_| panic!("Outcome::error_value called on the Ok alternative"),
            |error| error,
        )
    }
    /// Returns a mutable reference to the failure payload.
    ///
    /// # Panics
    /// If the success alternative is live.
    pub fn error_value_mut(&mut self) -> &mut E {
        self.match_mut(
            |_| panic!("Outcome::error_value_mut called on the Ok alternative"),
            |error| error,
        )
    }
    /// Consumes the outcome, returning the owned failure payload.
    ///
    /// # Panics
    /// If the success alternative is live.
    pub fn into_error(self) -> E
    where
        T: core::fmt::Debug,
    {
        self.match_owned(
            |value| panic!("Outcome::into_error called on the Ok alternative: {value:?}"),
            |error| error,
        )
    }
    /// Returns the success payload if it is live, `None` otherwise.
    pub fn ok(self) -> Option<T> {
        self.match_owned(Some, |_| None)
    }
    /// Returns the failure payload if it is live, `None` otherwise.
    pub fn err(self) -> Option<E> {
        self.match_owned(|_| None, Some)
    }
    /// Applies a computation to the success payload.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        self.match_owned(|value| Outcome::Ok(f(value)), Outcome::Err)
    }
    /// Applies a computation to the failure payload.
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> Outcome<T, F2> {
        self.match_owned(Outcome::Ok, |error| Outcome::Err(f(error)))
    }
    /// Applies a fallible computation to the success payload.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        self.match_owned(f, Outcome::Err)
    }
    /// Applies a recovering computation to the failure payload.
    pub fn or_else<F2, F: FnOnce(E) -> Outcome<T, F2>>(self, f: F) -> Outcome<T, F2> {
        self.match_owned(Outcome::Ok, f)
    }
    /// Returns the success payload if applicable, `default` otherwise.
    pub fn unwrap_or(self, default: T) -> T {
        self.unwrap_or_else(|_| default)
    }
    /// Returns the success payload if applicable, calling `f` on the failure otherwise.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        self.match_owned(|value| value, f)
    }
    /// Returns the failure payload if applicable, calling `f` on the success otherwise.
    pub fn unwrap_err_or_else<F: FnOnce(T) -> E>(self, f: F) -> E {
        self.match_owned(f, |error| error)
    }
}
