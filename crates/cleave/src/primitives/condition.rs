//! Portable error conditions and categories.
//!
//! ## Purpose
//!
//! This module provides a small errno-style subsystem: an integer error code
//! paired with a category that gives the code meaning. It lets backends and
//! embedding applications exchange platform-independent failure descriptions
//! without threading platform error types through the API.
//!
//! ## Design notes
//!
//! * **Identity-based categories**: a category is identified by the address
//!   of its `'static` instance, never by its name. Two category objects with
//!   equal names are still distinct categories.
//! * **Singleton default**: [`generic_category`] returns the process-wide
//!   generic category; default-constructed conditions belong to it.
//! * **Recognized enums**: types implementing [`ErrorConditionEnum`] convert
//!   into conditions directly; [`Errc`] is the built-in portable enumeration.
//! * **Standalone**: nothing in the partition layers constructs or consumes
//!   these types; the subsystem is a leaf offered at the API boundary.
//!
//! ## Key concepts
//!
//! * **Code**: a plain `i32`; `0` conventionally means success.
//! * **Category**: a `'static` object mapping codes to messages.
//! * **Condition**: a `(code, category)` value pair with total ordering.
//!
//! ## Invariants
//!
//! * Equality and ordering compare category identity first, then the code.
//! * Ordering is stable within a process; the relative order of two distinct
//!   categories is unspecified across processes.
//! * `message()` never fails; unrecognized codes produce a fallback string.
//!
//! ## Non-goals
//!
//! * This module does not integrate with the partition error type
//!   ([`CleaveError`](crate::primitives::errors::CleaveError)); partition
//!   failures keep their own enum.
//! * This module does not capture OS error state (`errno` is never read).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result};

// ============================================================================
// Error Category
// ============================================================================

/// A source of error codes with its own code-to-message mapping.
///
/// Implementors are installed as `'static` singletons; the singleton's
/// address is the category's identity.
pub trait ErrorCategory: Send + Sync {
    /// Short name of the category (e.g., `"generic"`).
    fn name(&self) -> &str;

    /// Human-readable description of `code` within this category.
    fn message(&self, code: i32) -> String;
}

/// The built-in category for portable, errno-style codes.
#[derive(Debug)]
pub struct GenericCategory;

impl ErrorCategory for GenericCategory {
    fn name(&self) -> &str {
        "generic"
    }

    fn message(&self, code: i32) -> String {
        match MESSAGES.binary_search_by_key(&code, |&(value, _)| value) {
            Ok(idx) => String::from(MESSAGES[idx].1),
            Err(_) => format!("Unknown error {code}"),
        }
    }
}

static GENERIC_CATEGORY: GenericCategory = GenericCategory;

/// The process-wide generic category singleton.
///
/// Every call returns the same object, so conditions built from it compare
/// equal by category.
#[inline]
pub fn generic_category() -> &'static dyn ErrorCategory {
    &GENERIC_CATEGORY
}

// Message table for the generic category, sorted by code for binary search.
static MESSAGES: &[(i32, &str)] = &[
    (0, "Success"),
    (1, "Operation not permitted"),
    (2, "No such file or directory"),
    (3, "No such process"),
    (4, "Interrupted system call"),
    (5, "Input/output error"),
    (6, "No such device or address"),
    (7, "Argument list too long"),
    (8, "Exec format error"),
    (9, "Bad file descriptor"),
    (10, "No child processes"),
    (11, "Resource temporarily unavailable"),
    (12, "Cannot allocate memory"),
    (13, "Permission denied"),
    (14, "Bad address"),
    (16, "Device or resource busy"),
    (17, "File exists"),
    (18, "Invalid cross-device link"),
    (19, "No such device"),
    (20, "Not a directory"),
    (21, "Is a directory"),
    (22, "Invalid argument"),
    (23, "Too many open files in system"),
    (24, "Too many open files"),
    (25, "Inappropriate ioctl for device"),
    (26, "Text file busy"),
    (27, "File too large"),
    (28, "No space left on device"),
    (29, "Illegal seek"),
    (30, "Read-only file system"),
    (31, "Too many links"),
    (32, "Broken pipe"),
    (33, "Numerical argument out of domain"),
    (34, "Numerical result out of range"),
    (35, "Resource deadlock avoided"),
    (36, "File name too long"),
    (37, "No locks available"),
    (38, "Function not implemented"),
    (39, "Directory not empty"),
    (40, "Too many levels of symbolic links"),
    (42, "No message of desired type"),
    (43, "Identifier removed"),
    (60, "Device not a stream"),
    (61, "No data available"),
    (62, "Timer expired"),
    (63, "Out of streams resources"),
    (67, "Link has been severed"),
    (71, "Protocol error"),
    (74, "Bad message"),
    (75, "Value too large for defined data type"),
    (84, "Invalid or incomplete multibyte or wide character"),
    (88, "Socket operation on non-socket"),
    (89, "Destination address required"),
    (90, "Message too long"),
    (91, "Protocol wrong type for socket"),
    (92, "Protocol not available"),
    (93, "Protocol not supported"),
    (95, "Operation not supported"),
    (97, "Address family not supported by protocol"),
    (98, "Address already in use"),
    (99, "Cannot assign requested address"),
    (100, "Network is down"),
    (101, "Network is unreachable"),
    (102, "Network dropped connection on reset"),
    (103, "Software caused connection abort"),
    (104, "Connection reset by peer"),
    (105, "No buffer space available"),
    (106, "Transport endpoint is already connected"),
    (107, "Transport endpoint is not connected"),
    (110, "Connection timed out"),
    (111, "Connection refused"),
    (113, "No route to host"),
    (114, "Operation already in progress"),
    (115, "Operation now in progress"),
    (125, "Operation canceled"),
    (130, "Owner died"),
    (131, "State not recoverable"),
];

// ============================================================================
// Portable Error Codes
// ============================================================================

/// Portable errno-style error codes.
///
/// The numeric values are the conventional Linux encodings and are this
/// library's wire values on every platform; they are never translated to the
/// host's own errno numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Errc {
    AddressFamilyNotSupported = 97,
    AddressInUse = 98,
    AddressNotAvailable = 99,
    AlreadyConnected = 106,
    ArgumentListTooLong = 7,
    ArgumentOutOfDomain = 33,
    BadAddress = 14,
    BadFileDescriptor = 9,
    BadMessage = 74,
    BrokenPipe = 32,
    ConnectionAborted = 103,
    ConnectionAlreadyInProgress = 114,
    ConnectionRefused = 111,
    ConnectionReset = 104,
    CrossDeviceLink = 18,
    DestinationAddressRequired = 89,
    DeviceOrResourceBusy = 16,
    DirectoryNotEmpty = 39,
    ExecutableFormatError = 8,
    FileExists = 17,
    FileTooLarge = 27,
    FilenameTooLong = 36,
    FunctionNotSupported = 38,
    HostUnreachable = 113,
    IdentifierRemoved = 43,
    IllegalByteSequence = 84,
    InappropriateIoControlOperation = 25,
    Interrupted = 4,
    InvalidArgument = 22,
    InvalidSeek = 29,
    IoError = 5,
    IsADirectory = 21,
    MessageSize = 90,
    NetworkDown = 100,
    NetworkReset = 102,
    NetworkUnreachable = 101,
    NoBufferSpace = 105,
    NoChildProcess = 10,
    NoLink = 67,
    NoLockAvailable = 37,
    NoMessage = 42,
    NoMessageAvailable = 61,
    NoProtocolOption = 92,
    NoSpaceOnDevice = 28,
    NoStreamResources = 63,
    NoSuchDevice = 19,
    NoSuchDeviceOrAddress = 6,
    NoSuchFileOrDirectory = 2,
    NoSuchProcess = 3,
    NotADirectory = 20,
    NotASocket = 88,
    NotAStream = 60,
    NotConnected = 107,
    NotEnoughMemory = 12,
    NotSupported = 95,
    OperationCanceled = 125,
    OperationInProgress = 115,
    OperationNotPermitted = 1,
    OwnerDead = 130,
    PermissionDenied = 13,
    ProtocolError = 71,
    ProtocolNotSupported = 93,
    ReadOnlyFileSystem = 30,
    ResourceDeadlockWouldOccur = 35,
    ResourceUnavailableTryAgain = 11,
    ResultOutOfRange = 34,
    StateNotRecoverable = 131,
    StreamTimeout = 62,
    TextFileBusy = 26,
    TimedOut = 110,
    TooManyFilesOpen = 24,
    TooManyFilesOpenInSystem = 23,
    TooManyLinks = 31,
    TooManySymbolicLinkLevels = 40,
    ValueTooLarge = 75,
    WrongProtocolType = 91,
}

impl Errc {
    /// `ENOTSUP` and `EOPNOTSUPP` share a code; both names resolve here.
    pub const OPERATION_NOT_SUPPORTED: Errc = Errc::NotSupported;

    /// `EAGAIN` and `EWOULDBLOCK` share a code; both names resolve here.
    pub const OPERATION_WOULD_BLOCK: Errc = Errc::ResourceUnavailableTryAgain;
}

// ============================================================================
// Recognized Enumerations
// ============================================================================

/// Marker trait recognizing an enumeration as a source of error conditions.
///
/// Implementing it unlocks [`make_error_condition`] and
/// [`ErrorCondition::from_enum`] for the type. The default category is the
/// generic one; override [`ErrorConditionEnum::category`] for enumerations
/// belonging to a custom category.
pub trait ErrorConditionEnum: Copy {
    /// Portable integer code of this enumerator.
    fn code(self) -> i32;

    /// Category the enumerator's codes belong to.
    fn category(self) -> &'static dyn ErrorCategory {
        generic_category()
    }
}

impl ErrorConditionEnum for Errc {
    fn code(self) -> i32 {
        self as i32
    }
}

/// Build the condition corresponding to a recognized enumerator.
#[inline]
pub fn make_error_condition<E: ErrorConditionEnum>(code: E) -> ErrorCondition {
    ErrorCondition::from_enum(code)
}

// ============================================================================
// Error Condition
// ============================================================================

/// A portable error value: an integer code within a category.
#[derive(Clone, Copy)]
pub struct ErrorCondition {
    value: i32,
    category: &'static dyn ErrorCategory,
}

impl ErrorCondition {
    /// Create a condition from a raw code and its category.
    #[inline]
    pub fn new(value: i32, category: &'static dyn ErrorCategory) -> Self {
        Self { value, category }
    }

    /// Create a condition from a recognized enumerator.
    #[inline]
    pub fn from_enum<E: ErrorConditionEnum>(code: E) -> Self {
        Self::new(code.code(), code.category())
    }

    /// Replace both code and category.
    #[inline]
    pub fn assign(&mut self, value: i32, category: &'static dyn ErrorCategory) {
        self.value = value;
        self.category = category;
    }

    /// Reset to the success state of the generic category.
    #[inline]
    pub fn clear(&mut self) {
        self.value = 0;
        self.category = generic_category();
    }

    /// The integer code.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The owning category.
    #[inline]
    pub fn category(&self) -> &'static dyn ErrorCategory {
        self.category
    }

    /// The category's description of this condition's code.
    pub fn message(&self) -> String {
        self.category.message(self.value)
    }

    /// Whether the condition represents a failure (any non-zero code).
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.value != 0
    }

    // Categories compare by object address; the vtable half of the fat
    // pointer is dropped because it is not unique per type.
    #[inline]
    fn category_ptr(&self) -> *const () {
        (self.category as *const dyn ErrorCategory).cast()
    }
}

impl Default for ErrorCondition {
    /// The success condition of the generic category.
    fn default() -> Self {
        Self::new(0, generic_category())
    }
}

impl From<Errc> for ErrorCondition {
    fn from(code: Errc) -> Self {
        Self::from_enum(code)
    }
}

// ============================================================================
// Comparisons
// ============================================================================

impl PartialEq for ErrorCondition {
    fn eq(&self, other: &Self) -> bool {
        self.category_ptr() == other.category_ptr() && self.value == other.value
    }
}

impl Eq for ErrorCondition {}

impl PartialOrd for ErrorCondition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorCondition {
    /// Lexicographic: category identity first, then code.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.category_ptr() as usize, self.value)
            .cmp(&(other.category_ptr() as usize, other.value))
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl Debug for ErrorCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ErrorCondition")
            .field("value", &self.value)
            .field("category", &self.category.name())
            .finish()
    }
}

impl Display for ErrorCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {}", self.category.name(), self.message())
    }
}
