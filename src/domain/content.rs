//! Static site content: pages, their sections, navigation and footer.
//!
//! Everything here is `'static` data. The presentation layer walks
//! [`Page::sections`] and renders each [`Section`] in order.

pub const BRAND: &str = "OptAlpha";
pub const TAGLINE: &str = "AI & ML Technology for Financial Markets";
pub const CONTACT_EMAIL: &str = "contact@optalpha.com";

/// A top-level page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Solutions,
    Technology,
    WhyOptAlpha,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Solutions,
        Page::Technology,
        Page::WhyOptAlpha,
        Page::Contact,
    ];

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Solutions => "Solutions",
            Page::Technology => "Technology",
            Page::WhyOptAlpha => "Why OptAlpha",
            Page::Contact => "Contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Solutions => "/solutions",
            Page::Technology => "/technology",
            Page::WhyOptAlpha => "/why-optalpha",
            Page::Contact => "/contact",
        }
    }

    /// Resolves a route path. Trailing slashes and case are ignored.
    ///
    /// ```
    /// use optalpha_site::domain::Page;
    ///
    /// assert_eq!(Page::from_path("/contact"), Some(Page::Contact));
    /// assert_eq!(Page::from_path("/Why-OptAlpha/"), Some(Page::WhyOptAlpha));
    /// assert_eq!(Page::from_path("/privacy"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Page> {
        let normalized = path.trim().trim_end_matches('/').to_ascii_lowercase();
        let normalized = if normalized.is_empty() { "/" } else { normalized.as_str() };
        Page::ALL.into_iter().find(|page| page.path() == normalized)
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn previous(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            Page::Home => HOME,
            Page::About => ABOUT,
            Page::Solutions => SOLUTIONS,
            Page::Technology => TECHNOLOGY,
            Page::WhyOptAlpha => WHY_OPTALPHA,
            Page::Contact => CONTACT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A call-to-action button. Activating it navigates to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub target: Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub path: &'static str,
}

/// Reusable presentational building blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero {
        eyebrow: &'static str,
        title: &'static str,
        subtitle: &'static str,
        actions: &'static [Action],
        highlights: &'static [&'static str],
    },
    FeatureGrid {
        eyebrow: Option<&'static str>,
        title: &'static str,
        intro: Option<&'static str>,
        cards: &'static [Card],
    },
    Stats {
        title: Option<&'static str>,
        stats: &'static [Stat],
    },
    Story {
        eyebrow: Option<&'static str>,
        title: &'static str,
        paragraphs: &'static [&'static str],
        highlights: &'static [Card],
    },
    Bullets {
        title: &'static str,
        description: &'static str,
        items: &'static [&'static str],
    },
    Steps {
        eyebrow: &'static str,
        title: &'static str,
        intro: &'static str,
        steps: &'static [Card],
    },
    Comparison {
        eyebrow: &'static str,
        title: &'static str,
        intro: &'static str,
        points: &'static [&'static str],
    },
    CtaBanner {
        title: &'static str,
        text: &'static str,
        actions: &'static [Action],
    },
    Notice {
        text: &'static str,
    },
    /// Placeholder for the interactive contact form.
    ContactForm,
}

impl Section {
    /// Actions this section offers, in display order.
    pub fn actions(&self) -> &'static [Action] {
        match self {
            Section::Hero { actions, .. } | Section::CtaBanner { actions, .. } => actions,
            _ => &[],
        }
    }
}

/// Every call-to-action on a page, in reading order.
pub fn page_actions(page: Page) -> Vec<Action> {
    page.sections()
        .iter()
        .flat_map(|section| section.actions().iter().copied())
        .collect()
}

pub struct FooterGroup {
    pub heading: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER_BLURB: &str = "AI & ML Technology for Financial Markets. Building advanced software solutions for trading and investment analytics.";
pub const FOOTER_LOCATION: &str = "Founded 2021 • Delhi, India";
pub const FOOTER_DISCLAIMER: &str = "OptAlpha is a technology provider and does not provide investment advice, brokerage services, or financial recommendations. Past performance of any system or methodology is not indicative of future results. Trading and investing involve significant risk of loss.";
pub const COPYRIGHT: &str = "© OptAlpha. All rights reserved.";

pub const FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        heading: "Company",
        links: &[
            Link { label: "About", path: "/about" },
            Link { label: "Technology", path: "/technology" },
            Link { label: "Why OptAlpha", path: "/why-optalpha" },
            Link { label: "Contact", path: "/contact" },
        ],
    },
    FooterGroup {
        heading: "Solutions",
        links: &[
            Link { label: "AI Analytics", path: "/solutions" },
            Link { label: "Trading Insights", path: "/solutions" },
            Link { label: "Market Intelligence", path: "/solutions" },
        ],
    },
    FooterGroup {
        heading: "Legal",
        links: &[
            Link { label: "Privacy Policy", path: "/privacy" },
            Link { label: "Terms of Service", path: "/terms" },
        ],
    },
];

const REQUEST_DEMO: Action = Action { label: "Request a Demo", target: Page::Contact };
const CONTACT_US: Action = Action { label: "Contact Us", target: Page::Contact };
const EXPLORE_SOLUTIONS: Action = Action { label: "Explore Solutions", target: Page::Solutions };

const VALUES: &[Card] = &[
    Card {
        title: "Research-Driven",
        description: "Every solution we build is grounded in rigorous research and validated methodologies.",
    },
    Card {
        title: "Innovation-First",
        description: "We continuously push the boundaries of what's possible with AI and machine learning.",
    },
    Card {
        title: "Expert Team",
        description: "Built by data scientists, engineers, and market experts with deep domain knowledge.",
    },
    Card {
        title: "Quality Focus",
        description: "We maintain the highest standards in code quality, security, and system reliability.",
    },
];

const BENEFITS: &[&str] = &[
    "Built specifically for modern financial markets",
    "AI-first architecture from the ground up",
    "Focus on precision, speed, and analytics",
    "Designed for traders and investors who value data",
    "Continuous innovation and improvement",
    "Research-backed methodologies",
    "Enterprise-grade security and reliability",
    "Scalable infrastructure for any volume",
];

static HOME: &[Section] = &[
    Section::Hero {
        eyebrow: "Founded 2021 • AI & ML Focus • Technology-First Approach",
        title: "AI-Powered Intelligence for Smarter Trading & Investment Decisions",
        subtitle: "OptAlpha builds advanced AI & Machine Learning software to help traders and investors analyze markets with clarity and confidence.",
        actions: &[REQUEST_DEMO, CONTACT_US],
        highlights: &[
            "AI-Driven Analytics",
            "Machine Learning Models",
            "Market Intelligence Tools",
            "Research-Backed Technology",
        ],
    },
    Section::FeatureGrid {
        eyebrow: Some("Our Solutions"),
        title: "Technology-Driven Market Intelligence",
        intro: Some("We build advanced software solutions that empower traders and investors with cutting-edge AI technology."),
        cards: &[
            Card {
                title: "AI-Based Market Analysis",
                description: "Advanced algorithms that process vast amounts of market data to identify patterns and trends invisible to traditional analysis.",
            },
            Card {
                title: "Intelligent Trading Insights",
                description: "Real-time market intelligence that helps traders make data-driven decisions with greater confidence.",
            },
            Card {
                title: "Predictive Models",
                description: "Machine learning models trained on historical data to provide forward-looking market perspectives.",
            },
            Card {
                title: "Data Analytics Platform",
                description: "Comprehensive analytics tools that transform raw market data into actionable intelligence.",
            },
            Card {
                title: "Real-Time Processing",
                description: "Ultra-low latency systems that process market information in milliseconds for timely insights.",
            },
            Card {
                title: "Enterprise Security",
                description: "Bank-grade security protocols protecting your data and trading strategies at all times.",
            },
        ],
    },
    Section::Notice {
        text: "OptAlpha is a technology provider. We do not provide investment advice or brokerage services.",
    },
    Section::Story {
        eyebrow: Some("About OptAlpha"),
        title: "Building the Future of Financial Technology",
        paragraphs: &[
            "Founded in 2021 and headquartered in Delhi, India, OptAlpha is an AI & Machine Learning–driven investment technology company focused on building advanced software solutions for trading and investment analytics.",
            "Our mission is to enhance trading and investment decision-making using advanced AI and machine learning technologies, empowering market participants with tools that were previously only available to large institutions.",
        ],
        highlights: VALUES,
    },
    Section::Stats {
        title: None,
        stats: &[
            Stat { value: "2021", label: "Founded" },
            Stat { value: "AI/ML", label: "Core Focus" },
            Stat { value: "Delhi", label: "Headquarters" },
            Stat { value: "Global", label: "Market Coverage" },
        ],
    },
    Section::FeatureGrid {
        eyebrow: Some("Our Technology"),
        title: "AI & Machine Learning at the Core",
        intro: Some("Our technology stack is built from the ground up for financial markets, combining cutting-edge AI with robust, scalable infrastructure."),
        cards: &[
            Card {
                title: "Neural Network Architecture",
                description: "Deep learning models optimized for financial time-series analysis and pattern recognition.",
            },
            Card {
                title: "Multi-Layer Processing",
                description: "Hierarchical data processing pipelines that extract insights at multiple levels of abstraction.",
            },
            Card {
                title: "Continuous Learning",
                description: "Self-improving systems that adapt to changing market conditions and new data patterns.",
            },
            Card {
                title: "High-Performance Computing",
                description: "Optimized infrastructure capable of processing millions of data points per second.",
            },
            Card {
                title: "Secure Infrastructure",
                description: "Enterprise-grade security with end-to-end encryption and comprehensive access controls.",
            },
            Card {
                title: "Scalable Cloud Platform",
                description: "Elastic infrastructure that scales seamlessly with demand and data volume.",
            },
        ],
    },
    Section::Steps {
        eyebrow: "Our Technology",
        title: "Data-Driven Decision Engine",
        intro: "Our proprietary algorithms process market data through multiple layers of analysis, from raw data ingestion to actionable insights, all in real-time.",
        steps: &[
            Card { title: "Data", description: "" },
            Card { title: "Processing", description: "" },
            Card { title: "Analysis", description: "" },
            Card { title: "Insights", description: "" },
        ],
    },
    Section::Comparison {
        eyebrow: "Why Choose Us",
        title: "The OptAlpha Advantage",
        intro: "In a world of information overload, OptAlpha provides clarity. Our AI-powered platform cuts through the noise to deliver actionable insights that matter.",
        points: BENEFITS,
    },
    Section::CtaBanner {
        title: "Ready to Transform Your Trading Intelligence?",
        text: "Join forward-thinking traders and investors who leverage OptAlpha's AI-powered technology to gain an edge in the markets.",
        actions: &[REQUEST_DEMO, EXPLORE_SOLUTIONS],
    },
];

static ABOUT: &[Section] = &[
    Section::Hero {
        eyebrow: "About Us",
        title: "Building the Future of Financial Technology",
        subtitle: "We're on a mission to democratize access to advanced AI technology for traders and investors worldwide.",
        actions: &[],
        highlights: &[],
    },
    Section::Story {
        eyebrow: None,
        title: "Our Story",
        paragraphs: &[
            "OptAlpha was founded in 2021 with a clear vision: to harness the power of artificial intelligence and machine learning to transform how traders and investors analyze financial markets.",
            "Headquartered in Delhi, India, our team of data scientists, engineers, and market experts work together to build technology solutions that were previously only accessible to large institutional players.",
            "We believe that better technology leads to better decisions. Our AI-driven platform is designed to cut through market noise and deliver actionable insights that matter.",
        ],
        highlights: &[
            Card {
                title: "Founded 2021",
                description: "Established with a vision to democratize AI-powered market analysis.",
            },
            Card {
                title: "Delhi, India",
                description: "Our headquarters, where innovation meets execution.",
            },
            Card {
                title: "Technology Provider",
                description: "We build tools and platforms, not investment advice.",
            },
        ],
    },
    Section::FeatureGrid {
        eyebrow: Some("Our Mission"),
        title: "Enhancing Decision-Making Through Technology",
        intro: Some("To enhance trading and investment decision-making using advanced AI and machine learning technologies, empowering market participants with institutional-grade tools and insights."),
        cards: &[],
    },
    Section::FeatureGrid {
        eyebrow: Some("Our Values"),
        title: "What Drives Us",
        intro: None,
        cards: &[
            Card {
                title: "Research-Driven",
                description: "Every solution we build is grounded in rigorous research and validated methodologies from leading academic institutions and industry experts.",
            },
            Card {
                title: "Innovation-First",
                description: "We continuously push the boundaries of what's possible with AI and machine learning, staying at the forefront of technological advancement.",
            },
            Card {
                title: "Expert Team",
                description: "Built by data scientists, engineers, and market experts with deep domain knowledge in both technology and financial markets.",
            },
            Card {
                title: "Quality Focus",
                description: "We maintain the highest standards in code quality, security, and system reliability, ensuring our clients can depend on our solutions.",
            },
        ],
    },
];

static SOLUTIONS: &[Section] = &[
    Section::Hero {
        eyebrow: "Our Solutions",
        title: "Technology-Driven Market Intelligence",
        subtitle: "Comprehensive AI and machine learning solutions designed to empower traders and investors with cutting-edge analytical capabilities.",
        actions: &[],
        highlights: &[],
    },
    Section::Bullets {
        title: "AI-Based Market Analysis",
        description: "Our advanced AI algorithms process vast amounts of market data in real-time, identifying patterns and trends that are invisible to traditional analysis methods.",
        items: &[
            "Pattern recognition across multiple timeframes",
            "Sentiment analysis from market data",
            "Anomaly detection systems",
            "Trend identification algorithms",
        ],
    },
    Section::Bullets {
        title: "Intelligent Trading Insights",
        description: "Transform raw market data into actionable intelligence with our suite of analytical tools designed specifically for active traders.",
        items: &[
            "Real-time market signals",
            "Multi-asset correlation analysis",
            "Volume and liquidity metrics",
            "Custom alert systems",
        ],
    },
    Section::Bullets {
        title: "Predictive Models & Analytics",
        description: "Machine learning models trained on historical data to provide forward-looking market perspectives and probability assessments.",
        items: &[
            "Statistical forecasting models",
            "Risk assessment frameworks",
            "Scenario analysis tools",
            "Backtesting infrastructure",
        ],
    },
    Section::Bullets {
        title: "Investment Intelligence Tools",
        description: "Comprehensive analytics platform that aggregates, processes, and visualizes market data for strategic decision-making.",
        items: &[
            "Portfolio analytics dashboard",
            "Custom data visualization",
            "Report generation",
            "API integrations",
        ],
    },
    Section::FeatureGrid {
        eyebrow: None,
        title: "Built for Performance & Security",
        intro: Some("Every solution is engineered with enterprise-grade security and optimized for high-performance computing."),
        cards: &[
            Card {
                title: "Ultra-Low Latency",
                description: "Real-time processing measured in milliseconds",
            },
            Card {
                title: "Enterprise Security",
                description: "Bank-grade encryption and access controls",
            },
            Card {
                title: "Scalable Infrastructure",
                description: "Cloud-native architecture that grows with you",
            },
        ],
    },
    Section::Notice {
        text: "Important: OptAlpha is a technology provider. We do not provide investment advice, brokerage services, or financial recommendations. Our tools are designed to assist with analysis and should not be considered as trading signals or investment guidance.",
    },
    Section::CtaBanner {
        title: "Ready to Get Started?",
        text: "Discover how OptAlpha's technology can enhance your market analysis capabilities.",
        actions: &[REQUEST_DEMO],
    },
];

static TECHNOLOGY: &[Section] = &[
    Section::Hero {
        eyebrow: "Technology",
        title: "AI & Machine Learning at the Core",
        subtitle: "Our technology stack is purpose-built for financial markets, combining cutting-edge AI research with battle-tested infrastructure.",
        actions: &[],
        highlights: &[],
    },
    Section::FeatureGrid {
        eyebrow: Some("Our Stack"),
        title: "Built for Financial Markets",
        intro: Some("Every component is designed with the unique demands of financial data processing in mind."),
        cards: &[
            Card {
                title: "Neural Network Architecture",
                description: "Deep learning models specifically optimized for financial time-series analysis and pattern recognition across multiple asset classes.",
            },
            Card {
                title: "Multi-Layer Processing",
                description: "Hierarchical data processing pipelines that extract insights at multiple levels of abstraction, from raw ticks to strategic signals.",
            },
            Card {
                title: "Continuous Learning Systems",
                description: "Self-improving algorithms that adapt to changing market conditions and incorporate new data patterns automatically.",
            },
            Card {
                title: "High-Performance Computing",
                description: "Optimized infrastructure capable of processing millions of data points per second with sub-millisecond latency.",
            },
            Card {
                title: "Enterprise Security",
                description: "Bank-grade security protocols with end-to-end encryption, comprehensive access controls, and audit logging.",
            },
            Card {
                title: "Scalable Cloud Platform",
                description: "Elastic cloud infrastructure that scales seamlessly with demand, ensuring consistent performance at any volume.",
            },
        ],
    },
    Section::Steps {
        eyebrow: "Architecture",
        title: "Data-Driven Decision Engine",
        intro: "Our proprietary algorithms process market data through multiple layers of analysis, from raw data ingestion to actionable insights, all in real-time.",
        steps: &[
            Card {
                title: "Data Ingestion",
                description: "Real-time market data feeds from multiple sources",
            },
            Card {
                title: "Processing Layer",
                description: "Normalization, cleaning, and feature extraction",
            },
            Card {
                title: "AI Analysis",
                description: "Neural network inference and pattern detection",
            },
            Card {
                title: "Insight Delivery",
                description: "Actionable outputs via dashboard and API",
            },
        ],
    },
    Section::Stats {
        title: Some("Pipeline"),
        stats: &[
            Stat { value: "Multiple Feeds", label: "Data Sources" },
            Stat { value: "< 1ms Latency", label: "Processing Engine" },
            Stat { value: "Deep Learning", label: "AI Models" },
            Stat { value: "Real-Time", label: "Insights" },
        ],
    },
    Section::CtaBanner {
        title: "Experience Our Technology",
        text: "See how OptAlpha's AI-powered platform can transform your market analysis workflow.",
        actions: &[Action { label: "Schedule a Demo", target: Page::Contact }],
    },
];

static WHY_OPTALPHA: &[Section] = &[
    Section::Hero {
        eyebrow: "Why Choose Us",
        title: "The OptAlpha Advantage",
        subtitle: "In a world of information overload, OptAlpha provides clarity. Our AI-powered platform cuts through the noise to deliver insights that matter.",
        actions: &[],
        highlights: &[],
    },
    Section::FeatureGrid {
        eyebrow: None,
        title: "What Sets Us Apart",
        intro: Some("OptAlpha combines cutting-edge technology with deep market expertise to deliver unmatched analytical capabilities."),
        cards: &[
            Card {
                title: "AI-First Architecture",
                description: "Built from the ground up with artificial intelligence at its core, not bolted on as an afterthought.",
            },
            Card {
                title: "Purpose-Built for Markets",
                description: "Every component is designed specifically for the unique demands of financial data processing.",
            },
            Card {
                title: "Real-Time Performance",
                description: "Sub-millisecond latency ensures you're always working with the most current market information.",
            },
            Card {
                title: "Enterprise Security",
                description: "Bank-grade encryption and security protocols protect your data and strategies.",
            },
            Card {
                title: "Continuous Innovation",
                description: "Our research team constantly improves our models and introduces new capabilities.",
            },
            Card {
                title: "Expert Support",
                description: "Dedicated team of specialists ready to help you maximize value from our platform.",
            },
        ],
    },
    Section::Comparison {
        eyebrow: "The Difference",
        title: "Modern AI vs. Traditional Methods",
        intro: "OptAlpha represents a fundamental shift in how market analysis is performed. Our AI-driven approach offers capabilities that traditional methods simply cannot match.",
        points: &[
            "Advanced AI algorithms vs. traditional technical indicators",
            "Real-time pattern recognition vs. delayed analysis",
            "Adaptive models vs. static rule-based systems",
            "Multi-dimensional data processing vs. single-source analysis",
            "Continuous learning vs. periodic updates",
            "Institutional-grade tools vs. retail-focused platforms",
        ],
    },
    Section::Stats {
        title: Some("Built for Data-Driven Traders"),
        stats: &[
            Stat { value: "< 1ms", label: "Processing Speed" },
            Stat { value: "Multiple", label: "Data Sources" },
            Stat { value: "Continuous", label: "Model Updates" },
            Stat { value: "Enterprise", label: "Security" },
        ],
    },
    Section::CtaBanner {
        title: "Ready to Experience the Difference?",
        text: "Join traders and investors who have elevated their analysis with OptAlpha's AI-powered technology.",
        actions: &[REQUEST_DEMO, EXPLORE_SOLUTIONS],
    },
];

static CONTACT: &[Section] = &[
    Section::Hero {
        eyebrow: "Contact Us",
        title: "Let's Start a Conversation",
        subtitle: "Whether you're interested in a demo, have questions about our technology, or want to explore partnership opportunities, we'd love to hear from you.",
        actions: &[],
        highlights: &[],
    },
    Section::Story {
        eyebrow: None,
        title: "Get in Touch",
        paragraphs: &[
            "We're here to help you explore how OptAlpha can enhance your trading and investment analysis. Reach out and our team will respond promptly.",
        ],
        highlights: &[
            Card {
                title: "Email Us",
                description: "contact@optalpha.com · We aim to respond within 24 hours",
            },
            Card {
                title: "Request a Demo",
                description: "Fill out the form and we'll schedule a personalized walkthrough of our platform.",
            },
            Card {
                title: "Office Location",
                description: "Delhi, India · Founded 2021 • Technology Provider",
            },
        ],
    },
    Section::ContactForm,
    Section::Notice {
        text: "OptAlpha is a technology provider. We do not provide investment advice, brokerage services, or financial recommendations. All inquiries are for technology and platform-related discussions only.",
    },
];
