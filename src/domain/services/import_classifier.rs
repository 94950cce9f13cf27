//! Import origin classifier
//!
//! Classification priority:
//! `shared_config` > `relative_import` > `standard_library` > `third_party` > `local_import`.
//!
//! Lookups go through `HashSet`s owned by the classifier instance, so every
//! classification is constant time regardless of how many reference names
//! are configured.

use std::collections::HashSet;

use crate::domain::value_objects::ImportOrigin;

/// Top-level modules of the Python standard library
const STANDARD_LIBRARY: &[&str] = &[
    "__future__", "_thread", "abc", "aifc", "argparse", "array", "ast", "asynchat",
    "asyncio", "asyncore", "atexit", "audioop", "base64", "bdb", "binascii", "bisect",
    "builtins", "bz2", "calendar", "cgi", "cgitb", "chunk", "cmath", "cmd", "code",
    "codecs", "codeop", "collections", "colorsys", "compileall", "concurrent",
    "configparser", "contextlib", "contextvars", "copy", "copyreg", "cProfile", "crypt",
    "csv", "ctypes", "curses", "dataclasses", "datetime", "dbm", "decimal", "difflib",
    "dis", "doctest", "email", "encodings", "ensurepip", "enum", "errno", "faulthandler",
    "fcntl", "filecmp", "fileinput", "fnmatch", "fractions", "ftplib", "functools", "gc",
    "getopt", "getpass", "gettext", "glob", "graphlib", "grp", "gzip", "hashlib", "heapq",
    "hmac", "html", "http", "imaplib", "imghdr", "importlib", "inspect", "io",
    "ipaddress", "itertools", "json", "keyword", "linecache", "locale", "logging", "lzma",
    "mailbox", "marshal", "math", "mimetypes", "mmap", "modulefinder", "multiprocessing",
    "netrc", "numbers", "operator", "optparse", "os", "pathlib", "pdb", "pickle",
    "pickletools", "pkgutil", "platform", "plistlib", "poplib", "posix", "pprint",
    "profile", "pstats", "pty", "pwd", "py_compile", "pyclbr", "pydoc", "queue", "quopri",
    "random", "re", "readline", "reprlib", "resource", "rlcompleter", "runpy", "sched",
    "secrets", "select", "selectors", "shelve", "shlex", "shutil", "signal", "site",
    "smtplib", "socket", "socketserver", "sqlite3", "ssl", "stat", "statistics", "string",
    "stringprep", "struct", "subprocess", "symtable", "sys", "sysconfig", "syslog",
    "tabnanny", "tarfile", "tempfile", "termios", "textwrap", "threading", "time",
    "timeit", "tkinter", "token", "tokenize", "tomllib", "trace", "traceback",
    "tracemalloc", "tty", "turtle", "types", "typing", "unicodedata", "unittest", "urllib",
    "uuid", "venv", "warnings", "wave", "weakref", "webbrowser", "wsgiref", "xml",
    "xmlrpc", "zipapp", "zipfile", "zipimport", "zlib", "zoneinfo",
];

/// Third-party packages commonly available to serverless functions
const THIRD_PARTY: &[&str] = &[
    "aiohttp", "attr", "attrs", "aws_lambda_powertools", "aws_xray_sdk", "azure", "bcrypt",
    "boto3", "botocore", "cachetools", "certifi", "charset_normalizer", "click",
    "cryptography", "dateutil", "dotenv", "elasticsearch", "google", "httpx", "idna",
    "jinja2", "jmespath", "jose", "jsonschema", "jwt", "marshmallow", "mypy_boto3_s3",
    "numpy", "opensearchpy", "orjson", "pandas", "psycopg2", "pydantic", "pymongo",
    "pymysql", "pytz", "redis", "requests", "requests_aws4auth", "s3transfer",
    "sentry_sdk", "simplejson", "six", "sqlalchemy", "stripe", "structlog", "tenacity",
    "typing_extensions", "ujson", "urllib3", "yaml",
];

/// Hash-set backed origin classifier
#[derive(Debug, Clone)]
pub struct ImportClassifier {
    standard_library: HashSet<String>,
    third_party: HashSet<String>,
    shared: HashSet<String>,
}

impl ImportClassifier {
    /// Classifier with the built-in reference sets and `shared_module` as the shared name
    pub fn new(shared_module: &str) -> Self {
        Self {
            standard_library: STANDARD_LIBRARY.iter().map(|s| s.to_string()).collect(),
            third_party: THIRD_PARTY.iter().map(|s| s.to_string()).collect(),
            shared: HashSet::from([shared_module.to_string()]),
        }
    }

    pub fn with_standard_library<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.standard_library.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_third_party<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.third_party.extend(names.into_iter().map(Into::into));
        self
    }

    /// Additional names treated as the shared module
    pub fn with_shared_aliases<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shared.extend(names.into_iter().map(Into::into));
        self
    }

    /// Classify a module path such as `os.path`, `.helpers` or `shared_configuration`
    pub fn classify(&self, module: &str) -> ImportOrigin {
        let stripped = module.trim_start_matches('.');
        let mut segments = stripped.split('.');
        let top = segments.next().unwrap_or_default();
        let last = segments.next_back().unwrap_or(top);

        if !top.is_empty() && (self.shared.contains(top) || self.shared.contains(last)) {
            return ImportOrigin::SharedConfig;
        }
        if module.starts_with('.') {
            return ImportOrigin::RelativeImport;
        }
        if self.standard_library.contains(top) {
            return ImportOrigin::StandardLibrary;
        }
        if self.third_party.contains(top) {
            return ImportOrigin::ThirdParty;
        }
        ImportOrigin::LocalImport
    }

    /// Classify a `from` import; `from . import shared_configuration` is shared.
    pub fn classify_from(&self, module: &str, names: &[String]) -> ImportOrigin {
        let origin = self.classify(module);
        if origin == ImportOrigin::RelativeImport
            && module.trim_start_matches('.').is_empty()
            && names.iter().any(|name| self.shared.contains(binding_source(name)))
        {
            return ImportOrigin::SharedConfig;
        }
        origin
    }

    /// Highest-priority origin among several modules bound by one plain import
    pub fn classify_all<'a>(&self, modules: impl IntoIterator<Item = &'a str>) -> ImportOrigin {
        modules
            .into_iter()
            .map(|m| self.classify(m))
            .max_by_key(ImportOrigin::priority)
            .unwrap_or(ImportOrigin::LocalImport)
    }
}

/// `"name as alias"` -> `"name"`
fn binding_source(token: &str) -> &str {
    token
        .split_once(" as ")
        .map(|(name, _)| name.trim())
        .unwrap_or(token)
}
