// src/catalog/data.rs
// Hard-coded portfolio content

use chrono::NaiveDate;

use super::{
    Article, Catalog, Education, Experience, Profile, ProjectContent, ProjectRecord, Skills,
    SocialKind, SocialLink, Testimonial,
};

const OWNER: &str = "Sameem Qureshi";
const EMAIL: &str = "qureshisameem01@gmail.com";
const AUTHOR: &str = "M. Qureshi";

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(super) fn builtin() -> Catalog {
    Catalog {
        profile: profile(),
        social_links: social_links(),
        projects: projects(),
        articles: articles(),
        testimonials: testimonials(),
        experience: experience(),
        education: education(),
        skills: Skills {
            programming: list(&["Python", "Java", "JavaScript", "TypeScript"]),
            ml: list(&["LLMs", "NLP", "LangChain", "Vector Stores", "Embeddings", "Text Chunking", "RAG"]),
            data: list(&["Data Preprocessing", "Data Manipulation", "Statistical Methods", "Data Analysis"]),
            web: list(&["VS Code Extension Development", "Flask", "FastAPI", "Django"]),
        },
        certifications: list(&[
            "Foundation Level Certificate – IITM BS",
            "Diploma Level Certificate – IITM BS",
            "Python – Programming for Everybody (Coursera)",
            "Computer Networks – NPTEL",
            "Social Networks – NPTEL",
            "SQL – HackerRank",
        ]),
    }
}

fn profile() -> Profile {
    Profile {
        name: OWNER.to_string(),
        headline: "AI/ML & LLM Engineer".to_string(),
        current_role: "AI/ML/LLM Gen AI Engineer @ Logitech · May 2024 – Present".to_string(),
        education_badge: "IIT Madras · BS in Data Science & Applications".to_string(),
        location: "Pune · India".to_string(),
        phone: "+91 7972817097".to_string(),
        email: EMAIL.to_string(),
        site_description: "Portfolio of Sameem Qureshi, an AI/ML Engineer specializing in LLMs, RAG systems, and full-stack development at Logitech.".to_string(),
        about_heading: "Building Practical AI Systems".to_string(),
        about: list(&[
            "I design and ship AI systems that bridge research-grade models with real-world developer workflows. My recent work focuses on LLM-powered developer tooling, retrieval-augmented generation (RAG) pipelines, and scalable backend infrastructure.",
            "From VS Code extensions and code intelligence to data-heavy analytics projects, I enjoy working end-to-end: data ingestion, modeling, evaluation, and productionization.",
        ]),
        contact_pitch: "I'm actively exploring roles and collaborations around LLMs, RAG systems, developer tooling, and backend platforms. If you're building in this space (or want to), I'd be happy to discuss how I can help.".to_string(),
    }
}

fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            kind: SocialKind::Github,
            href: "https://github.com/sameemqureshi".to_string(),
            label: "GitHub".to_string(),
        },
        SocialLink {
            kind: SocialKind::Linkedin,
            href: "https://www.linkedin.com/in/sameemqureshi/".to_string(),
            label: "LinkedIn".to_string(),
        },
        SocialLink {
            kind: SocialKind::Email,
            href: format!("mailto:{EMAIL}"),
            label: "Email".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    title: &str,
    slug: &str,
    description: &str,
    tags: &[&str],
    image: &str,
    color: &str,
    github: &str,
    content: ProjectContent,
) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        tags: list(tags),
        image: image.to_string(),
        color: color.to_string(),
        github: github.to_string(),
        content,
    }
}

fn content(overview: &str, features: &[&str], challenges: &str, solutions: &str) -> ProjectContent {
    ProjectContent {
        overview: overview.to_string(),
        features: list(features),
        challenges: challenges.to_string(),
        solutions: solutions.to_string(),
    }
}

fn projects() -> Vec<ProjectRecord> {
    vec![
        project(
            "Heart Disease Prediction: End-to-End Production MLOps Pipeline on GCP",
            "heart-disease-prediction-mlops",
            "Production-ready heart disease prediction system featuring an end-to-end MLOps workflow from training to deployment on GKE, complete with CI/CD, observability, and model governance.",
            &["MLOps", "GCP", "Kubernetes", "FastAPI", "Docker", "GitHub Actions", "Prometheus", "SHAP"],
            "/heart-disease-prediction.png",
            "from-red-500/20 to-rose-600/20",
            "https://github.com/sameemqureshi/21f1000868_IITMBS_MLOPS_OPPE2",
            content(
                "A robust, production-grade machine learning pipeline for heart disease prediction. This project demonstrates a full MLOps lifecycle, ensuring model reliability, scalability, and maintainability in a cloud-native environment.",
                &[
                    "Containerized FastAPI inference service deployed on Google Kubernetes Engine (GKE) with auto-scaling.",
                    "Automated CI/CD pipeline using GitHub Actions for building and pushing images to Artifact Registry.",
                    "Comprehensive observability with Prometheus metrics and structured logging.",
                    "Advanced model governance including SHAP-based explainability, fairness evaluation with Fairlearn, and drift detection with Evidently.",
                ],
                "Ensuring consistent model performance and reliability in a production environment while managing infrastructure complexity and model fairness.",
                "Implemented a GitOps approach with automated pipelines. Integrated specialized tools for monitoring model drift and bias to maintain high standards of AI ethics and reliability.",
            ),
        ),
        project(
            "DocuVision RAG: AI-Driven Visual Knowledge Extraction",
            "docuvision-rag",
            "End-to-end Retrieval Augmented Generation (RAG) system for querying visually rich PDFs, images, and text using Vision Language Models and FastAPI. Designed for sourced, context-aware responses with improved accuracy and processing speed over traditional RAG systems.",
            &["RAG", "Python", "FastAPI", "PyTorch", "Vision Language Models", "ChromaDB"],
            "/Docu-Vision-Rag.png",
            "from-cyan-500/20 to-blue-600/20",
            "https://github.com/sameemqureshi/DocuVision-RAG-AI-Driven-Visual-Knowledge-Extraction",
            content(
                "Traditional RAG systems struggle with complex documents containing charts, diagrams, and tables. DocuVision RAG solves this by leveraging Vision Language Models (VLMs) to interpret visual elements alongside textual content, providing a holistic understanding of documents.",
                &[
                    "Multi-modal ingestion pipeline capable of processing PDFs, images, and mixed-media documents.",
                    "Integration with ChromaDB for efficient vector storage and similarity search.",
                    "Context-aware retrieval that preserves document structure and layout information.",
                    "High-performance API built with FastAPI for real-time query processing.",
                ],
                "Extracting meaningful semantic information from complex layouts (e.g., multi-column PDFs, embedded charts) was a major bottleneck. Standard OCR tools often lost context.",
                "Implemented a custom pre-processing pipeline using layout analysis models to segment documents into meaningful chunks before embedding. Used VLMs to generate textual descriptions for visual components, enriching the vector index.",
            ),
        ),
        project(
            "Household Services App",
            "household-services-app",
            "Full-stack multi-role household services platform with user registration, task workflows, admin verification, background jobs, and real-time data pipelines to streamline operations.",
            &["Python", "Flask", "SQLAlchemy", "Vue.js", "Redis", "Celery"],
            "https://placehold.co/600x400/png?text=Household+Services",
            "from-purple-500/20 to-pink-600/20",
            "https://github.com/sameemqureshi/HouseholdServices",
            content(
                "A comprehensive platform connecting service professionals with homeowners. It manages the entire lifecycle of a service request, from booking to completion and payment.",
                &[
                    "Role-based access control (RBAC) for Admins, Professionals, and Customers.",
                    "Asynchronous background jobs using Celery and Redis for email notifications and report generation.",
                    "Interactive dashboard built with Vue.js for real-time status tracking.",
                    "RESTful API backend with Flask and SQLAlchemy for robust data management.",
                ],
                "Handling concurrent bookings and ensuring data consistency across multiple user roles while maintaining a responsive UI.",
                "Utilized database transactions and optimistic locking in SQLAlchemy to prevent race conditions. Implemented a reactive frontend with Vue.js to provide instant feedback to users without full page reloads.",
            ),
        ),
        project(
            "End-to-End Speech-to-Text Data Pipeline",
            "speech-to-text-pipeline",
            "Scalable automated speech-to-text pipeline for audio extraction, preprocessing, ASR dataset curation, and reporting using NVIDIA NeMo, ffmpeg, and Python tooling.",
            &["WebScraping", "Audio Preprocessing", "Text Processing", "Python", "NVIDIA NeMo", "ffmpeg"],
            "https://placehold.co/600x400/png?text=Speech+to+Text",
            "from-emerald-500/20 to-teal-600/20",
            "https://github.com/sameemqureshi/Speech-To-Text",
            content(
                "Building high-quality ASR datasets requires processing thousands of hours of audio. This pipeline automates the collection, cleaning, and transcription of audio data for training speech models.",
                &[
                    "Automated web scraping and audio extraction from various sources.",
                    "Audio normalization and noise reduction using ffmpeg.",
                    "Speaker diarization and transcription using NVIDIA NeMo toolkit.",
                    "Quality assurance reporting to identify and filter low-confidence transcriptions.",
                ],
                "Processing large volumes of audio data efficiently and handling diverse audio formats and quality levels.",
                "Designed a parallel processing architecture using Python multiprocessing. Implemented adaptive filtering logic to automatically discard or flag poor-quality audio segments based on signal-to-noise ratio.",
            ),
        ),
        project(
            "Sentiment Prediction on Movie Reviews",
            "sentiment-movie-reviews",
            "NLP pipeline for sentiment analysis on movie reviews, covering preprocessing, classical ML models, and evaluation for practical decision-making insights.",
            &["NLP", "Python", "Machine Learning", "Data Preprocessing", "Model Evaluation"],
            "https://placehold.co/600x400/png?text=Sentiment+Analysis",
            "from-amber-500/20 to-orange-600/20",
            "https://github.com/sameemqureshi/Sentiment-Analysis",
            content(
                "An analytical tool designed to gauge public opinion by classifying movie reviews as positive or negative. It serves as a foundational project for understanding NLP workflows.",
                &[
                    "Text preprocessing pipeline: tokenization, lemmatization, and stop-word removal.",
                    "Comparison of multiple classifiers: Naive Bayes, Logistic Regression, and SVM.",
                    "Visualization of model performance using confusion matrices and ROC curves.",
                    "Deployment-ready model serialization.",
                ],
                "Dealing with sarcasm and context-dependent sentiment in informal review text.",
                "Experimented with n-gram features and TF-IDF weighting to capture more context. Fine-tuned model hyperparameters to balance precision and recall.",
            ),
        ),
        project(
            "Answerly – Q&A Chatbot using LLM and LangChain",
            "answerly-chatbot",
            "Conversational Q&A assistant leveraging LangChain, Hugging Face models, vector stores, and DataStax to deliver grounded answers over enterprise data.",
            &["LLM", "LangChain", "Hugging Face", "Vector Stores", "DataStax", "Python"],
            "https://placehold.co/600x400/png?text=Answerly+Chatbot",
            "from-fuchsia-500/20 to-purple-600/20",
            "https://github.com/sameemqureshi/Answerly-Chat-Bot",
            content(
                "Answerly is a bridge between static enterprise knowledge bases and dynamic user queries. It uses RAG to provide accurate, source-cited answers.",
                &[
                    "Integration with DataStax Astra DB for scalable vector storage.",
                    "Usage of open-source LLMs via Hugging Face for cost-effective inference.",
                    "Memory management to maintain context across multi-turn conversations.",
                    "Streamlit-based user interface for easy interaction.",
                ],
                "Ensuring the chatbot restricts its answers to the provided context and avoids hallucinations.",
                "Implemented strict prompt engineering techniques and a retrieval verification step. Used LangChain chains to enforce source grounding in the final response generation.",
            ),
        ),
        project(
            "Business Data Management Capstone",
            "business-data-management",
            "Analytics capstone studying real-world enterprise sales data for demand forecasting, product performance, and data-driven business decisions.",
            &["Data Collection", "Data Analysis", "Data Visualization", "Microsoft Excel"],
            "https://placehold.co/600x400/png?text=Business+Data",
            "from-sky-500/20 to-indigo-600/20",
            "https://github.com/sameemqureshi?tab=repositories",
            content(
                "A deep dive into business intelligence, transforming raw sales data into actionable strategic insights.",
                &[
                    "Comprehensive data cleaning and normalization of sales records.",
                    "Dashboard creation for tracking key performance indicators (KPIs).",
                    "Trend analysis to identify seasonal demand patterns.",
                    "Predictive modeling for future inventory requirements.",
                ],
                "Aggregating data from disparate sources with inconsistent formatting.",
                "Developed standardized data transformation protocols in Excel and Python. Created automated validation scripts to ensure data integrity before analysis.",
            ),
        ),
    ]
}

fn article(title: &str, slug: &str, date: NaiveDate, description: &str) -> Article {
    Article {
        title: title.to_string(),
        slug: slug.to_string(),
        date,
        author: AUTHOR.to_string(),
        description: description.to_string(),
    }
}

fn articles() -> Vec<Article> {
    vec![
        article(
            "End-to-End MLOps on GCP: From Training to Deployment",
            "mlops-on-gcp",
            date(2024, 2, 1),
            "A comprehensive guide to building production-ready MLOps pipelines on Google Cloud Platform, covering containerization, Kubernetes deployment, and automated CI/CD with GitHub Actions.",
        ),
        article(
            "Building Serverless Analytics Pipelines with AWS EventBridge & Lambda",
            "aws-serverless-analytics",
            date(2024, 2, 15),
            "Learn how to design and implement scalable, serverless telemetry pipelines using AWS EventBridge, Lambda, Kinesis, and S3 for real-time application usage analytics.",
        ),
        article(
            "Mastering RAG: Building Context-Aware LLM Applications",
            "mastering-rag",
            date(2023, 11, 1),
            "A deep dive into Retrieval Augmented Generation (RAG) and how to build LLM applications that provide grounded, context-aware responses, leveraging techniques for efficient information retrieval.",
        ),
        article(
            "Developing VS Code Extensions with AI: Code Intelligence & Privacy",
            "vscode-ai-extension",
            date(2023, 11, 15),
            "Learn the architectural patterns and implementation details of creating an AI-powered VS Code extension, focusing on structured code indexing, hybrid storage, and privacy-preserving LLM integrations.",
        ),
        article(
            "Leveraging Vector Databases for Semantic Search in AI Systems",
            "vector-databases-ai",
            date(2023, 12, 1),
            "Explore the power of vector databases like LanceDB and ChromaDB for enabling semantic search and efficient similarity retrieval in modern AI and RAG applications.",
        ),
        article(
            "Beyond ChatGPT: Integrating Open-Source LLMs (Meta, Alibaba) in Production",
            "open-source-llms",
            date(2023, 12, 15),
            "A practical guide to integrating and deploying open-source Large Language Models from providers like Meta and Alibaba into scalable production environments using Python and FastAPI.",
        ),
        article(
            "Advanced Retrieval Techniques for RAG: Multi-Query & MMR",
            "advanced-rag",
            date(2024, 1, 1),
            "Delve into advanced retrieval strategies such as multi-query retrieval and Maximum Marginal Relevance (MMR) to significantly improve the accuracy and diversity of responses in RAG systems.",
        ),
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Chen".to_string(),
            role: "Senior Product Manager".to_string(),
            text: "Sameem transformed our vague requirements into a robust RAG pipeline that actually understands context. His ability to bridge the gap between research models and production code is rare.".to_string(),
        },
        Testimonial {
            name: "David Miller".to_string(),
            role: "Lead Developer @ TechFlow".to_string(),
            text: "I worked with Sameem on the Household Services app. His backend architecture was clean, scalable, and he was always proactive about solving potential bottlenecks before they became issues.".to_string(),
        },
    ]
}

fn experience() -> Vec<Experience> {
    vec![Experience {
        company: "Logitech".to_string(),
        role: "AI/ML/GenAI Engineer".to_string(),
        period: "May 2024 – Present".to_string(),
        highlights: list(&[
            "Application Usage Analytics Pipeline (AWS Serverless): Built a serverless telemetry pipeline using EventBridge → Lambda → Firehose → S3 to log application usage events into an S3-based data lake. Implemented event enrichment and conditional routing for segmented analytics, with strict trigger detection and structured logging.",
            "AI-powered VS Code Extension: Built an AI-assisted VS Code extension for in-editor code completion, explanations, and debugging with a focus on privacy and developer productivity. Developed a Tree-sitter-based code indexing pipeline and hybrid retrieval system using SQLite (metadata) + LanceDB (vector search) for fast repository-level context search.",
            "Scalable AI Backend, Console & MCP Integrations: Built a scalable Python/FastAPI backend on an Azure Private Instance, integrating multiple LLM providers. Developed a developer console for usage, billing, and model consumption insights. Improved RAG quality using Multi-Query Retrieval and MMR, and added extensible support for Model Context Protocol (MCP) servers.",
        ]),
        stack: list(&[
            "Python", "FastAPI", "AWS Serverless", "Tree-sitter", "SQLite", "LanceDB", "Azure", "OpenAI",
            "Bedrock", "Meta LLMs", "Alibaba Cloud", "VS Code Extensions", "RAG",
        ]),
    }]
}

fn education() -> Vec<Education> {
    let entry = |period: &str, degree: &str, institute: &str, note: &str| Education {
        period: period.to_string(),
        degree: degree.to_string(),
        institute: institute.to_string(),
        note: note.to_string(),
    };

    vec![
        entry("2020 – Present", "Bachelor's in Data Science and Applications", "IIT Madras", "CGPA: 8.09"),
        entry("2020 – 2024", "Bachelor's in Computer Science", "DYPIEMR, Pune", "CGPA: 8.70"),
        entry("2018 – 2020", "Class 12th HSC", "Maulana Azad College, Aurangabad", "86.00%"),
        entry("2017 – 2018", "Class 10th SSC", "Saint Francis De Sales High School, Aurangabad", "91.00%"),
    ]
}
