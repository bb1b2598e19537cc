//! Reserved-word guard for generated enumerators.
//!
//! Enumerators are always upper-case, so the table stores the upper-cased
//! spelling of every C (C89 through C23) and C++ (C++98 through C++23) keyword,
//! plus macro names that common standard and platform headers predefine.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

const C_KEYWORDS: &[&str] = &[
	"AUTO", "BREAK", "CASE", "CHAR", "CONST", "CONTINUE", "DEFAULT", "DO", "DOUBLE", "ELSE", "ENUM",
	"EXTERN", "FLOAT", "FOR", "GOTO", "IF", "INLINE", "INT", "LONG", "REGISTER", "RESTRICT", "RETURN",
	"SHORT", "SIGNED", "SIZEOF", "STATIC", "STRUCT", "SWITCH", "TYPEDEF", "UNION", "UNSIGNED", "VOID",
	"VOLATILE", "WHILE", "_ALIGNAS", "_ALIGNOF", "_ATOMIC", "_BITINT", "_BOOL", "_COMPLEX",
	"_DECIMAL128", "_DECIMAL32", "_DECIMAL64", "_GENERIC", "_IMAGINARY", "_NORETURN",
	"_STATIC_ASSERT", "_THREAD_LOCAL", "ALIGNAS", "ALIGNOF", "BOOL", "CONSTEXPR", "FALSE", "NULLPTR",
	"STATIC_ASSERT", "THREAD_LOCAL", "TRUE", "TYPEOF", "TYPEOF_UNQUAL",
];

const CPP_KEYWORDS: &[&str] = &[
	"AND", "AND_EQ", "ASM", "BITAND", "BITOR", "CATCH", "CHAR8_T", "CHAR16_T", "CHAR32_T", "CLASS",
	"COMPL", "CONCEPT", "CONSTEVAL", "CONSTINIT", "CONST_CAST", "CO_AWAIT", "CO_RETURN", "CO_YIELD",
	"DECLTYPE", "DELETE", "DYNAMIC_CAST", "EXPLICIT", "EXPORT", "FRIEND", "MUTABLE", "NAMESPACE",
	"NEW", "NOEXCEPT", "NOT", "NOT_EQ", "OPERATOR", "OR", "OR_EQ", "PRIVATE", "PROTECTED", "PUBLIC",
	"REINTERPRET_CAST", "REQUIRES", "STATIC_CAST", "TEMPLATE", "THIS", "THROW", "TRY", "TYPEID",
	"TYPENAME", "USING", "VIRTUAL", "WCHAR_T", "XOR", "XOR_EQ",
];

const PREDEFINED_MACROS: &[&str] = &[
	"EOF", "BUFSIZ", "FILENAME_MAX", "EXIT_SUCCESS", "EXIT_FAILURE", "RAND_MAX", "CHAR_BIT",
	"INT_MAX", "INT_MIN", "UINT_MAX", "LONG_MAX", "LONG_MIN", "SIZE_MAX", "INFINITY", "NAN",
	"HUGE_VAL", "ERRNO", "EDOM", "ERANGE", "EINVAL", "ASSERT", "NDEBUG", "STDIN", "STDOUT", "STDERR",
	"MIN", "MAX", "IN", "OUT", "OPTIONAL", "ERROR", "INFINITE", "__FILE__", "__LINE__", "__DATE__",
	"__TIME__", "__FUNC__", "__STDC__", "__CPLUSPLUS",
];

static RESERVED: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
	C_KEYWORDS
		.iter()
		.chain(CPP_KEYWORDS)
		.chain(PREDEFINED_MACROS)
		.copied()
		.collect()
});

/// Returns true if `candidate` collides with a reserved word. Case-sensitive.
pub fn is_reserved(candidate: &str) -> bool {
	RESERVED.contains(candidate)
}

/// Appends `_` to reserved candidates; everything else passes through.
pub fn escape_reserved(mut candidate: String) -> String {
	if is_reserved(&candidate) {
		candidate.push('_');
	}
	candidate
}
