use crate::models::case_study::{CaseStudy, Figure, FigureGroup};
use crate::models::media::MediaItem;
use crate::models::profile::{Profile, ProfileLink, SkillGroup, Skills};
use crate::models::project::{Highlight, ProjectSummary, Tier};

use super::Registry;

const TESLA_BODY: &str = include_str!("tesla.md");

pub(super) fn registry() -> Registry {
    Registry::new(profile(), skills(), media(), projects(), case_studies())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn profile() -> Profile {
    Profile {
        name: "Misbah Shaikh".into(),
        headline: "Data Science • ML Engineering".into(),
        tagline: "Building intelligent, automated analytics & AI-powered solutions".into(),
        role: "Data Scientist & ML Engineer (Entry–Intermediate)".into(),
        location: "Dallas, TX".into(),
        avatar: "/images/mainprofile.jpg".into(),
        email: "shaikhamisbah099@gmail.com".into(),
        phone: "713-205-7875".into(),
        links: vec![
            ProfileLink {
                label: "GitHub".into(),
                href: "https://github.com/099Misbah".into(),
            },
            ProfileLink {
                label: "LinkedIn".into(),
                href: "http://linkedin.com/in/misbah-s-3a703b216".into(),
            },
        ],
        about: "I design end-to-end data solutions that turn messy, real-world data into clear \
                insights, predictive models, and scalable pipelines. With a Master’s in Applied \
                Statistics & Data Science and hands-on experience delivering production analytics \
                and ML solutions, I specialize in analytics, machine learning, and automation, from \
                ETL pipelines and forecasting models to executive dashboards and deployed APIs."
            .into(),
        focus: "My focus is simple: make data reliable, insights actionable, and solutions scalable."
            .into(),
        hero_pills: strings(&[
            "Python",
            "SQL",
            "BI Tools",
            "AWS",
            "Databricks",
            "FastAPI",
            "Docker",
            "Business Book Reader",
        ]),
    }
}

fn skills() -> Skills {
    Skills {
        groups: vec![
            SkillGroup {
                title: "Data Science & ML Learning".into(),
                summary: "Predictive modeling, classification & regression, time series forecasting \
                          (ARIMA/SARIMA), NLP fundamentals"
                    .into(),
                tools: "Python (Pandas, NumPy, scikit-learn), TensorFlow, PyTorch".into(),
            },
            SkillGroup {
                title: "Data Engineering & Cloud".into(),
                summary: "Designing and automating ETL/ELT pipelines, API-based data ingestion, \
                          scalable data processing"
                    .into(),
                tools: "AWS (S3, Glue, Lambda), Databricks, PySpark, FastAPI, Docker, Airflow (basic)"
                    .into(),
            },
            SkillGroup {
                title: "Analytics & BI".into(),
                summary: "Advanced SQL querying, KPI definition, dashboard design, executive reporting"
                    .into(),
                tools: "SQL (Advanced), Power BI (DAX, Power Query), Tableau, Excel".into(),
            },
        ],
        professional: strings(&[
            "Stakeholder communication",
            "Business problem solving",
            "Data-driven decision making",
            "Cross-functional collaboration",
            "Presentation Skill",
            "Executive storytelling",
        ]),
        reading_note: "Influenced by self-development & business books reading (The Go-Giver, \
                       Atomic Habits, The Art of Bouncing Back, The Confident Mind, The Servant, \
                       The Miracle Morning)."
            .into(),
    }
}

fn media() -> Vec<MediaItem> {
    vec![
        MediaItem::certificate(
            "IBM Data Science Professional Certificate",
            "IBM / Coursera",
            "Issued 2025",
            "/images/certificate/DSpro.jpg",
        ),
        MediaItem::certificate(
            "SQL (Intermediate)",
            "HackerRank",
            "Issued Oct 2025",
            "/images/certificate/SQLin.jpg",
        ),
        MediaItem::certificate(
            "Machine Learning with Python",
            "IBM / Coursera",
            "2025",
            "/images/certificate/ML.jpg",
        ),
        MediaItem::certificate(
            "Database and SQL for Data Science with Python",
            "IBM / Coursera",
            "2025",
            "/images/certificate/DB&sql.jpg",
        ),
        MediaItem::certificate(
            "Python for Data Science, AI & Development",
            "IBM / Coursera",
            "2025",
            "/images/certificate/py-AI.jpg",
        ),
        MediaItem::certificate(
            "Data Analyst with Python",
            "IBM / Coursera",
            "2025",
            "/images/certificate/DA.jpg",
        ),
        MediaItem::badge(
            "IBM Python Project for Data Science",
            Some("IBM"),
            "/images/badges/Badge.jpeg",
        ),
        MediaItem::book(
            "The Go-Giver",
            None,
            "/images/books/go.jpeg",
            "Lead with value first: focus on giving more in service/value than you take in payment.",
        ),
        MediaItem::book(
            "Atomic Habits",
            None,
            "/images/books/atomic.jpg",
            "Build systems, not goals: small habits compound into big results over time.",
        ),
        MediaItem::book(
            "The Miracle Morning",
            None,
            "/images/books/miracle.png",
            "Start the day intentionally: a consistent morning routine boosts focus and execution.",
        ),
        MediaItem::book(
            "The Art of Bouncing Back",
            None,
            "/images/books/bouncing.jpeg",
            "Resilience is trainable: reframe setbacks and take small actions to regain momentum.",
        ),
        MediaItem::book(
            "The Confident Mind",
            None,
            "/images/books/confident.jpeg",
            "Confidence comes from preparation + self-talk: control what you can, release the rest.",
        ),
        MediaItem::book(
            "The Servant",
            None,
            "/images/books/servant.jpg",
            "Leadership = service: trust and influence come from empathy, listening, and consistency.",
        ),
        MediaItem::book(
            "No Excuse",
            None,
            "/images/books/no.jpeg",
            "Success is built on self-discipline. Take full responsibility, eliminate excuses, and \
             execute consistently even when motivation is low.",
        ),
    ]
}

fn projects() -> Vec<ProjectSummary> {
    use Tier::{Additional, Featured};

    vec![
        ProjectSummary::new(
            "Tesla Stock Forecasting & Time Series Analysis",
            "tesla",
            Featured,
            "Time-series modeling and forecasting using ARIMA/ETS/SARIMA with diagnostics and evaluation.",
            &["Python", "Time Series", "ARIMA/SARIMA"],
        )
        .with_link("https://github.com/099Misbah/Tesla-Stock-Price-Analysis")
        .with_highlight(Highlight::new(
            "/images/projects/tesla/tesla.jpg",
            "Tesla Stock Forecasting & Time Series Analysis",
            "Designed a time-series forecasting pipeline to analyze trends, volatility, and seasonality in Tesla stock data. Compared ARIMA and SARIMA models using statistical diagnostics to generate short-term forecasts and decision-ready insights.",
            &["Time Series Forecasting", "Statistical Modeling", "Financial Analytics"],
        )),
        ProjectSummary::new(
            "Global Startup Ecosystem: Funding & Growth Analysis",
            "startup-ecosystem",
            Featured,
            "End-to-end pipeline + Power BI dashboard + ML classification to predict funding outcomes.",
            &["Power BI", "Python", "ML", "ETL"],
        )
        .with_highlight(Highlight::new(
            "/images/projects/startup-ecosystem/cover.png",
            "Global Startup Ecosystem Analytics Platform",
            "Built an end-to-end analytics solution combining automated ETL pipelines, KPI dashboards, and predictive modeling to analyze global startup funding patterns and forecast investment outcomes.",
            &["KPI Design & Dashboards", "Data Pipelines (ETL)", "Predictive Analytics"],
        )),
        ProjectSummary::new(
            "Freight Fraud Detection & Risk Analytics",
            "fraud-detection",
            Featured,
            "Fraud-risk classification with model comparison and KPI dashboards for monitoring.",
            &["Python", "scikit-learn", "Power BI", "SQL"],
        )
        .with_highlight(Highlight::new(
            "/images/projects/fraud-detection/cover.png",
            "Freight Fraud Detection & Risk Analytics System",
            "Developed a fraud risk analytics solution using supervised machine learning to identify high-risk freight transactions. Delivered KPI dashboards to support operational monitoring and reduce manual investigation effort.",
            &["Risk Analytics", "Anomaly & Fraud Detection", "Operational Dashboards"],
        )),
        ProjectSummary::new(
            "Cloud-Based ETL Pipeline for Logistics Data (AWS)",
            "aws-etl",
            Featured,
            "Automated AWS ETL pipeline (S3/Glue/Lambda) with data validation and operational KPIs.",
            &["AWS", "Glue", "Lambda", "ETL", "Power BI"],
        ),
        ProjectSummary::new(
            "NLP-Powered Data Career & Job Scam Detection Bot",
            "nlp-bot",
            Featured,
            "Streamlit NLP chatbot using TF-IDF + Logistic Regression for intent classification and guidance.",
            &["NLP", "Streamlit", "Python", "scikit-learn"],
        ),
        ProjectSummary::new(
            "Automatic Number Plate Recognition (ANPR)",
            "anpr",
            Additional,
            "Deep learning object detection using Faster R-CNN (ResNet-50) for license plate detection.",
            &["PyTorch", "Computer Vision", "Faster R-CNN"],
        ),
        ProjectSummary::new(
            "The Stack Overflow Developer Survey Results (2019)",
            "stackoverflow",
            Additional,
            "Survey analysis with EDA + dashboards to uncover trends in roles, compensation, and tech usage.",
            &["Python", "SQL", "EDA", "BI"],
        ),
        ProjectSummary::new(
            "Real Estate Price Forecasting & Analytics",
            "real-estate",
            Additional,
            "Regression-based forecasting with dashboards to support pricing and investment decisions.",
            &["Python", "Regression", "Power BI", "SQL"],
        ),
    ]
}

fn figure(image_ref: &str, caption: &str) -> Figure {
    Figure {
        image_ref: image_ref.to_string(),
        caption: caption.to_string(),
    }
}

fn case_studies() -> Vec<CaseStudy> {
    let dir = "/images/projects/tesla";
    vec![CaseStudy {
        slug: "tesla".into(),
        headline: "Tesla Stock Forecasting & Time Series Analysis".into(),
        summary: "Weekly time-series forecasting of Tesla stock prices using ARIMA, ETS, and SARIMA \
                  with stationarity testing, diagnostics, and model comparison."
            .into(),
        tools: strings(&["Python", "R", "ARIMA", "SARIMA", "ETS", "ADF Test", "ACF/PACF"]),
        repository: Some("https://github.com/099Misbah/Tesla-Stock-Price-Analysis".into()),
        body: TESLA_BODY.to_string(),
        figure_groups: vec![
            FigureGroup {
                title: "Forecast Comparison (ARIMA vs ETS vs SARIMA)".into(),
                figures: vec![
                    figure(&format!("{}/Forcast - ARIMA.png", dir), "ARIMA Forecast"),
                    figure(&format!("{}/Forcast - ETS.png", dir), "ETS Forecast"),
                    figure(&format!("{}/Forcast - SARIMA.png", dir), "SARIMA Forecast"),
                ],
            },
            FigureGroup {
                title: "Trend & Seasonality Decomposition".into(),
                figures: vec![
                    figure(&format!("{}/decomposition.png", dir), "Time Series Decomposition"),
                    figure(&format!("{}/aug.png", dir), "Augmented decomposition"),
                ],
            },
            FigureGroup {
                title: "ACF & PACF Diagnostics".into(),
                figures: vec![
                    figure(&format!("{}/ACF.png", dir), "ACF"),
                    figure(&format!("{}/PACF.png", dir), "PACF"),
                ],
            },
            FigureGroup {
                title: "Residual Diagnostics".into(),
                figures: (0..5)
                    .map(|i| {
                        let file = if i == 0 {
                            format!("{}/residual.png", dir)
                        } else {
                            format!("{}/residual{}.png", dir, i)
                        };
                        figure(&file, &format!("Residual Plot {}", i + 1))
                    })
                    .collect(),
            },
            FigureGroup {
                title: "Model Summary".into(),
                figures: vec![figure(&format!("{}/Model.png", dir), "Model summary")],
            },
        ],
    }]
}
