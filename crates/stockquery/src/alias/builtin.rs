//! Built-in vocabulary for Indian equities.

use super::table::{AliasCategory, AliasEntry};

type RawTable = &'static [(&'static str, &'static [&'static str])];

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

const METRICS: RawTable = &[
    (
        "PE",
        &[
            "pe",
            "p/e",
            "p e",
            "pe ratio",
            "p/e ratio",
            "price to earnings",
            "price earnings",
        ],
    ),
    (
        "PB",
        &["pb", "p/b", "p b", "pb ratio", "price to book", "price to book value"],
    ),
    (
        "PRICE",
        &["price", "share price", "market price", "stock price", "current price"],
    ),
    (
        "MarketCapCr",
        &["market cap", "marketcap", "market capitalization", "mcap"],
    ),
    ("EPS", &["eps", "earnings per share"]),
    (
        "DividendYieldPct",
        &["dividend", "dividend yield", "div yield"],
    ),
];

// ---------------------------------------------------------------------------
// Sectors
// ---------------------------------------------------------------------------

const SECTORS: RawTable = &[
    (
        "Energy",
        &["energy", "oil", "gas", "petroleum", "oil and gas", "oil & gas"],
    ),
    (
        "Information Technology",
        &[
            "information technology",
            "it",
            "tech",
            "technology",
            "software",
            "infotech",
        ],
    ),
    (
        "Financials",
        &[
            "financials",
            "financial",
            "finance",
            "banking",
            "bank",
            "banks",
            "nbfc",
            "insurance",
            "financial services",
        ],
    ),
    (
        "Automobile",
        &[
            "automobile",
            "auto",
            "automotive",
            "cars",
            "vehicles",
            "automobiles",
        ],
    ),
    (
        "Consumer Staples",
        &[
            "consumer staples",
            "fmcg",
            "consumer goods",
            "staples",
            "fast moving consumer goods",
        ],
    ),
    (
        "Consumer Discretionary",
        &[
            "consumer discretionary",
            "discretionary",
            "retail",
            "consumer durables",
        ],
    ),
    (
        "Healthcare",
        &[
            "healthcare",
            "health",
            "pharma",
            "pharmaceutical",
            "pharmaceuticals",
            "hospitals",
            "health care",
        ],
    ),
    (
        "Materials",
        &[
            "materials",
            "material",
            "metals",
            "metal",
            "mining",
            "steel",
            "cement",
            "chemicals",
            "metals and mining",
        ],
    ),
    (
        "Industrials",
        &[
            "industrials",
            "industrial",
            "manufacturing",
            "engineering",
            "construction",
            "infrastructure",
        ],
    ),
    (
        "Utilities",
        &["utilities", "utility", "power", "electricity", "electric"],
    ),
    (
        "Communication Services",
        &[
            "communication services",
            "telecom",
            "communication",
            "telco",
            "telecommunications",
        ],
    ),
    (
        "Conglomerate",
        &["conglomerate", "diversified", "conglomerates"],
    ),
    (
        "Real Estate",
        &["real estate", "realty", "property", "real-estate"],
    ),
];

// ---------------------------------------------------------------------------
// Indices
// ---------------------------------------------------------------------------

const INDICES: RawTable = &[
    (
        "NIFTY50",
        &["nifty 50", "nifty50", "nifty fifty", "niftyfifty", "nifty-50"],
    ),
    (
        "NIFTY100",
        &["nifty 100", "nifty100", "nifty hundred", "nifty-100"],
    ),
    (
        "NIFTYIT",
        &[
            "nifty it",
            "niftyit",
            "nifty-it",
            "nifty information technology",
            "nifty tech",
        ],
    ),
    (
        "NIFTYBANK",
        &["nifty bank", "niftybank", "nifty-bank", "nifty banking"],
    ),
    (
        "NIFTYFMCG",
        &["nifty fmcg", "niftyfmcg", "nifty-fmcg", "nifty consumer staples"],
    ),
    (
        "NIFTYENERGY",
        &["nifty energy", "niftyenergy", "nifty-energy", "nifty oil gas"],
    ),
    (
        "NIFTYAUTO",
        &["nifty auto", "niftyauto", "nifty-auto", "nifty automobile"],
    ),
    (
        "NIFTYPHARMA",
        &[
            "nifty pharma",
            "niftypharma",
            "nifty-pharma",
            "nifty pharmaceutical",
            "nifty healthcare",
        ],
    ),
    (
        "NIFTYMETAL",
        &["nifty metal", "niftymetal", "nifty-metal", "nifty metals"],
    ),
    (
        "NIFTYREALTY",
        &["nifty realty", "niftyrealty", "nifty-realty", "nifty real estate"],
    ),
];

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

const COMPARATORS: RawTable = &[
    (
        "gt",
        &[">", "greater than", "higher than", "more than", "above", "over"],
    ),
    ("lt", &["<", "less than", "lower than", "under", "below"]),
    (
        "ge",
        &[">=", "at least", "greater than or equal to", "no less than"],
    ),
    (
        "le",
        &["<=", "at most", "less than or equal to", "no more than"],
    ),
    ("eq", &["=", "equal to", "equals", "exactly"]),
];

// ---------------------------------------------------------------------------
// Stock entities
// ---------------------------------------------------------------------------

const STOCK_ENTITIES: RawTable = &[
    ("RELIANCE", &["reliance", "reliance industries", "ril"]),
    (
        "TCS",
        &["tcs", "tata consultancy", "tata consultancy services"],
    ),
    ("INFY", &["infy", "infosys"]),
    ("HDFCBANK", &["hdfc bank", "hdfcbank", "hdfc"]),
    ("ICICIBANK", &["icici bank", "icicibank", "icici"]),
    ("AXISBANK", &["axis bank", "axisbank", "axis"]),
    (
        "SBIN",
        &["sbi", "sbin", "state bank", "state bank of india"],
    ),
    (
        "KOTAKBANK",
        &["kotak", "kotak bank", "kotak mahindra bank", "kotakbank"],
    ),
    ("BAJAJ-AUTO", &["bajaj auto", "bajaj-auto", "bajajauto"]),
    ("BAJFINANCE", &["bajaj finance", "bajfinance"]),
    (
        "M&M",
        &[
            "m&m",
            "mahindra",
            "mahindra & mahindra",
            "mahindra and mahindra",
        ],
    ),
    ("MARUTI", &["maruti", "maruti suzuki"]),
    ("TATAMOTORS", &["tata motors", "tatamotors"]),
    ("TATASTEEL", &["tata steel", "tatasteel"]),
    ("ITC", &["itc"]),
    ("WIPRO", &["wipro"]),
    (
        "HCLTECH",
        &["hcltech", "hcl tech", "hcl technologies"],
    ),
    (
        "LT",
        &["l&t", "larsen", "larsen & toubro", "larsen and toubro"],
    ),
    (
        "SUNPHARMA",
        &["sun pharma", "sunpharma", "sun pharmaceutical"],
    ),
    ("BHARTIARTL", &["bharti airtel", "airtel", "bhartiartl"]),
    (
        "HINDUNILVR",
        &["hindustan unilever", "hul", "hindunilvr"],
    ),
    ("ASIANPAINT", &["asian paints", "asianpaint"]),
    ("ONGC", &["ongc"]),
    ("NTPC", &["ntpc"]),
    ("POWERGRID", &["power grid", "powergrid"]),
];

/// Built-in entries for a category, in declaration order.
pub fn builtin_entries(category: AliasCategory) -> Vec<AliasEntry> {
    let raw = match category {
        AliasCategory::Metric => METRICS,
        AliasCategory::Index => INDICES,
        AliasCategory::Sector => SECTORS,
        AliasCategory::Comparator => COMPARATORS,
        AliasCategory::StockEntity => STOCK_ENTITIES,
    };
    raw.iter()
        .map(|(canonical, aliases)| AliasEntry::new(*canonical, aliases))
        .collect()
}
