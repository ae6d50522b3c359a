//! Token rules and the registry that holds them
//!
//! A token rule pairs a native-syntax pattern with a handler that turns the matched
//! extended syntax into native syntax. Rules are tried most-recently-registered first,
//! so a later rule overrides an earlier one on overlapping input.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{
    builtins,
    compiler::CompileContext,
    error::{RegexError, Result},
    syntax::Scope,
    unicode::{self, UnicodeTable},
    ExecLimits,
};

/// Handler invoked when a rule matches; returns the native replacement text
pub type TokenHandler =
    dyn Fn(&TokenMatch<'_>, Scope, &mut CompileContext) -> Result<String> + Send + Sync;

/// Predicate deciding whether a rule takes part in the current compilation
pub type TokenTrigger = dyn Fn(&CompileContext) -> bool + Send + Sync;

static GLOBAL: Lazy<TokenRegistry> = Lazy::new(|| {
    let registry = TokenRegistry::with_builtins();
    unicode::install_all(&registry).expect("bundled Unicode tables register cleanly");
    registry
});

/// The text a token rule matched, with its capture groups
#[derive(Debug, Clone)]
pub struct TokenMatch<'a> {
    input: &'a str,
    groups: Vec<Option<(usize, usize)>>,
}

impl<'a> TokenMatch<'a> {
    /// Whole matched text
    pub fn as_str(&self) -> &'a str {
        self.get(0).unwrap_or("")
    }

    /// Text of capture group `index`, if it participated
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.groups
            .get(index)
            .copied()
            .flatten()
            .map(|(start, end)| &self.input[start..end])
    }

    /// Byte offset where the match starts
    pub fn start(&self) -> usize {
        self.groups[0].map_or(0, |(start, _)| start)
    }

    /// Byte offset where the match ends
    pub fn end(&self) -> usize {
        self.groups[0].map_or(0, |(_, end)| end)
    }

    /// The full pattern being compiled
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Pattern text following the match
    pub fn rest(&self) -> &'a str {
        &self.input[self.end()..]
    }
}

/// A single extension to the pattern syntax
pub struct TokenRule {
    pattern: fancy_regex::Regex,
    handler: Box<TokenHandler>,
    scope: Scope,
    trigger: Option<Box<TokenTrigger>>,
}

impl TokenRule {
    /// Create a rule matching `pattern` (native syntax) in the default scope
    pub fn new<H>(pattern: &str, handler: H) -> Result<Self>
    where
        H: Fn(&TokenMatch<'_>, Scope, &mut CompileContext) -> Result<String>
            + Send
            + Sync
            + 'static,
    {
        let pattern = ExecLimits::default().build_native(pattern)?;
        Ok(Self {
            pattern,
            handler: Box::new(handler),
            scope: Scope::default(),
            trigger: None,
        })
    }

    /// Restrict or widen the scopes the rule applies in
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Only apply the rule while `trigger` holds
    pub fn trigger<T>(mut self, trigger: T) -> Self
    where
        T: Fn(&CompileContext) -> bool + Send + Sync + 'static,
    {
        self.trigger = Some(Box::new(trigger));
        self
    }

    /// Native pattern the rule matches
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub(crate) fn applies(&self, scope: Scope, context: &CompileContext) -> bool {
        self.scope.intersects(scope) && self.trigger.as_ref().map_or(true, |t| t(context))
    }

    /// Leftmost match of the rule at or after `pos`
    pub(crate) fn find_from<'a>(
        &self,
        input: &'a str,
        pos: usize,
    ) -> Result<Option<TokenMatch<'a>>> {
        let Some(captures) = self.pattern.captures_from_pos(input, pos)? else {
            return Ok(None);
        };
        let groups = (0..captures.len())
            .map(|i| captures.get(i).map(|m| (m.start(), m.end())))
            .collect();
        Ok(Some(TokenMatch { input, groups }))
    }

    pub(crate) fn handle(
        &self,
        token: &TokenMatch<'_>,
        scope: Scope,
        context: &mut CompileContext,
    ) -> Result<String> {
        (self.handler)(token, scope, context)
    }
}

impl fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRule")
            .field("pattern", &self.pattern.as_str())
            .field("scope", &self.scope)
            .field("trigger", &self.trigger.is_some())
            .finish()
    }
}

/// Ordered collection of token rules
///
/// Registration only succeeds while the registry is enabled. Disabling it blocks further
/// additions but keeps every rule already registered.
#[derive(Debug)]
pub struct TokenRegistry {
    rules: RwLock<Vec<Arc<TokenRule>>>,
    extensible: AtomicBool,
    unicode: Arc<UnicodeTable>,
    unicode_rule: AtomicBool,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenRegistry {
    /// Empty, disabled registry
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(Vec::new()),
            extensible: AtomicBool::new(false),
            unicode: Arc::new(UnicodeTable::default()),
            unicode_rule: AtomicBool::new(false),
        }
    }

    /// Disabled registry holding the built-in syntax rules
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.enable();
        builtins::install(&registry).expect("built-in token patterns are valid");
        registry.disable();
        registry
    }

    /// Process-wide registry used by `Regex::new` and `Regex::with_flags`
    ///
    /// Holds the built-in rules and every bundled Unicode package.
    pub fn global() -> &'static TokenRegistry {
        &GLOBAL
    }

    /// Allow `register` calls
    pub fn enable(&self) {
        self.extensible.store(true, Ordering::SeqCst);
        log::debug!("token registry extensibility enabled");
    }

    /// Refuse further `register` calls; existing rules stay
    pub fn disable(&self) {
        self.extensible.store(false, Ordering::SeqCst);
        log::debug!("token registry extensibility disabled");
    }

    /// Whether `register` currently succeeds
    pub fn is_enabled(&self) -> bool {
        self.extensible.load(Ordering::SeqCst)
    }

    /// Append a rule; it takes priority over every rule registered before it
    pub fn register(&self, rule: TokenRule) -> Result<()> {
        if !self.is_enabled() {
            return Err(RegexError::ExtensibilityDisabled);
        }
        log::debug!("registering token rule {:?}", rule.pattern());
        self.rules.write().push(Arc::new(rule));
        Ok(())
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Whether no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    /// Register Unicode token names (`name -> "XXXX-YYYY..."`) and their aliases
    ///
    /// The first call installs the `\p{..}` rule that supersedes the built-in placeholder.
    pub fn add_unicode_token_set(
        &self,
        mapping: &[(&str, &str)],
        aliases: &[(&str, &str)],
    ) -> Result<()> {
        if !self.is_enabled() {
            return Err(RegexError::ExtensibilityDisabled);
        }
        self.unicode.insert(mapping, aliases)?;
        if !self.unicode_rule.load(Ordering::SeqCst) {
            self.register(unicode::token_rule(Arc::clone(&self.unicode))?)?;
            self.unicode_rule.store(true, Ordering::SeqCst);
        }
        log::debug!(
            "registered {} Unicode tokens ({} aliases)",
            mapping.len(),
            aliases.len()
        );
        Ok(())
    }

    /// Whether a Unicode token called `name` (in any spelling) is registered
    pub fn has_unicode_token(&self, name: &str) -> bool {
        self.unicode.contains(name)
    }

    /// Rules in priority order, most recent first
    pub(crate) fn snapshot(&self) -> Vec<Arc<TokenRule>> {
        self.rules.read().iter().rev().cloned().collect()
    }
}
