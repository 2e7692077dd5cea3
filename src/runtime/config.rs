use std::env::var;
use tracing::warn;



/// How the `'` sigil treats underscores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteStyle
{
    /// `'hello_world` is the string "hello world".
    #[default]
    UnderscoreToSpace,

    /// `'hello_world` is the string "hello_world".
    Verbatim
}


/// Interpreter settings.  Built directly by embedders or read from the environment by the binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig
{
    pub quote_style: QuoteStyle,

    /// When set, reading a variable that was never written is an error instead of pushing the
    /// absent value.
    pub strict_variables: bool,

    /// Print the greeting after the bootstrap program has run.
    pub banner: bool
}


impl Default for InterpreterConfig
{
    fn default() -> Self
    {
        InterpreterConfig
            {
                quote_style: QuoteStyle::default(),
                strict_variables: false,
                banner: true
            }
    }
}


impl InterpreterConfig
{
    /// Read the configuration from `SKYNET_QUOTE_STYLE`, `SKYNET_STRICT_VARIABLES` and
    /// `SKYNET_BANNER`.  Unset or unrecognized values keep their defaults.
    pub fn from_env() -> InterpreterConfig
    {
        let mut config = InterpreterConfig::default();

        if let Ok(style) = var("SKYNET_QUOTE_STYLE")
        {
            match parse_quote_style(&style)
            {
                Some(style) => config.quote_style = style,
                None => warn!(value = %style, "unrecognized SKYNET_QUOTE_STYLE, using the default")
            }
        }

        config.strict_variables = env_flag("SKYNET_STRICT_VARIABLES", config.strict_variables);
        config.banner = env_flag("SKYNET_BANNER", config.banner);

        config
    }
}


fn parse_quote_style(text: &str) -> Option<QuoteStyle>
{
    match text.trim().to_ascii_lowercase().as_str()
    {
        "underscore" | "underscore-to-space" => Some(QuoteStyle::UnderscoreToSpace),
        "verbatim"                           => Some(QuoteStyle::Verbatim),
        _                                    => None
    }
}


fn parse_flag(text: &str) -> Option<bool>
{
    match text.trim().to_ascii_lowercase().as_str()
    {
        "1" | "true" | "yes" | "on"  => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _                            => None
    }
}


fn env_flag(name: &str, default: bool) -> bool
{
    match var(name)
    {
        Ok(text) => parse_flag(&text).unwrap_or_else(||
            {
                warn!(variable = name, value = %text, "unrecognized flag value, using the default");
                default
            }),

        Err(_) => default
    }
}
