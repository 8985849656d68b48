//! Content tables.

use super::{
    Achievement, AchievementCategory, Certification, ExperienceEntry, Highlight, Link, Project,
    ProjectCategory, ProjectStatus, Skill, SkillCategory, Stat,
};

// =============================================================================
// About
// =============================================================================

pub const STATS: &[Stat] = &[
    Stat { label: "Years Experience", value: "2+" },
    Stat { label: "Projects Completed", value: "15+" },
    Stat { label: "Cloud Deployments", value: "50+" },
    Stat { label: "Team Collaborations", value: "10+" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Education",
        description: "BTech at National Institute of Technology Karnataka",
        detail: "Focusing on Computer Science with specialization in DevOps and Cloud Technologies",
    },
    Highlight {
        title: "Cloud Expertise",
        description: "AWS Certified Cloud Practitioner",
        detail: "Specialized in EKS, RDS, EC2, S3, and cloud-native architectures",
    },
    Highlight {
        title: "Development",
        description: "Full-stack development with DevOps focus",
        detail: "React, Node.js, Python, Golang with emphasis on infrastructure automation",
    },
    Highlight {
        title: "Achievements",
        description: "Top 75 Coders - HackOn with Amazon",
        detail: "KodeKloud Engineer with 45,000 XP demonstrating practical DevOps skills",
    },
];

pub const CURRENT_FOCUS: &[&str] = &[
    "Cloud-Native Architecture Design",
    "Infrastructure as Code (Terraform, Helm)",
    "Container Orchestration & Security",
    "Observability & Performance Optimization",
];

// =============================================================================
// Experience
// =============================================================================

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "fixpliance",
        company: "FixplianceAI",
        role: "Platform Engineer",
        period: "May 2025 - Present",
        location: "Remote",
        description: "Leading platform engineering initiatives and infrastructure optimization for AI-powered compliance solutions.",
        achievements: &[
            "Implemented Traefik reverse proxy reducing latency by 20%",
            "Automated GitHub Release Notes generation saving 10+ hours weekly",
            "Orchestrated Docker Swarm deployments for microservices architecture",
            "Built monitoring dashboards improving system observability",
        ],
        technologies: &["Traefik", "Docker Swarm", "GitHub Actions", "Prometheus", "Grafana"],
        current: true,
    },
    ExperienceEntry {
        id: "upwork",
        company: "UpWork",
        role: "FreeLancer - DevOps Engineer",
        period: "Feb 2024 - Present",
        location: "Remote",
        description: "Providing DevOps consulting services for various clients, specializing in cloud-native solutions and infrastructure automation.",
        achievements: &[
            "Deployed PostgreSQL clusters using CloudNativePG operator",
            "Managed Kubernetes workloads on Amazon EKS",
            "Implemented GitOps workflows with ArgoCD",
            "Optimized cloud costs by 30% through resource right-sizing",
            "Set up comprehensive monitoring and alerting systems",
        ],
        technologies: &["Kubernetes", "Amazon EKS", "ArgoCD", "PostgreSQL", "Helm", "Terraform"],
        current: false,
    },
    ExperienceEntry {
        id: "aiplanet",
        company: "AI PLANET",
        role: "DevOps Engineer",
        period: "Aug 2024 - May 2025",
        location: "Remote",
        description: "Built and maintained CI/CD pipelines and cloud infrastructure for AI and machine learning platforms.",
        achievements: &[
            "Developed GitHub Actions workflows reducing deployment time by 40%",
            "Deployed applications on Amazon EKS with auto-scaling capabilities",
            "Implemented monitoring stack using Prometheus, Grafana, and Loki",
            "Managed Amazon RDS migrations with zero downtime",
            "Created disaster recovery procedures improving system resilience",
        ],
        technologies: &["GitHub Actions", "Amazon EKS", "Prometheus", "Grafana", "Loki", "Amazon RDS"],
        current: false,
    },
];

// =============================================================================
// Projects
// =============================================================================

pub const PROJECTS: &[Project] = &[
    Project {
        id: "ml-platform",
        title: "Cloud-Native ML Platform Setup",
        description: "Scalable Language Model inference system with Kubernetes orchestration and automated scaling.",
        long_description: "Built a comprehensive cloud-native machine learning platform that can scale Language Model inference workloads automatically. The platform includes custom Helm charts for deployment, persistent volume claims for model storage, horizontal pod autoscaling for traffic spikes, and comprehensive k6 performance testing. The infrastructure supports multiple model types and can handle thousands of concurrent requests with sub-second response times.",
        technologies: &["Python", "Ollama", "AWS", "Kubernetes", "Docker", "Helm", "k6"],
        features: &[
            "Custom Helm charts for microservices deployment",
            "Persistent Volume Claims for model storage",
            "Horizontal Pod Autoscaler for dynamic scaling",
            "k6 performance testing and load balancing",
            "Multi-model support with version management",
            "Real-time monitoring and alerting",
        ],
        github_url: Some("https://github.com/jyothiram266/mlops-project"),
        live_url: None,
        category: ProjectCategory::Cloud,
        status: ProjectStatus::Completed,
    },
    Project {
        id: "devopsified-golang",
        title: "DevOpsified-GoLang-app",
        description: "Complete CI/CD pipeline for Golang application with Docker, Kubernetes, and GitOps workflow.",
        long_description: "A fully automated DevOps pipeline for a Golang web application featuring multi-stage Docker builds, Amazon EKS deployment, Nginx Ingress configuration, and ArgoCD GitOps workflow. The project demonstrates modern DevOps practices including infrastructure as code, automated testing, security scanning, and zero-downtime deployments.",
        technologies: &["Golang", "Docker", "AWS EKS", "Helm", "ArgoCD", "GitHub Actions", "Nginx"],
        features: &[
            "Multi-stage Docker builds for optimization",
            "Amazon EKS cluster with auto-scaling",
            "Nginx Ingress Controller with SSL/TLS",
            "ArgoCD GitOps deployment workflow",
            "Automated GitHub Actions CI/CD",
            "Security scanning and vulnerability assessment",
            "Blue-green deployment strategy",
        ],
        github_url: Some("https://github.com/jyothiram266/devops-projects/tree/master/go-web-app"),
        live_url: None,
        category: ProjectCategory::Devops,
        status: ProjectStatus::Completed,
    },
    Project {
        id: "terraform-aws",
        title: "Terraform Jenkins AWS Infrastructure",
        description: "Infrastructure as Code templates for AWS with best practices and security configurations.",
        long_description: "Production-ready Terraform modules for AWS infrastructure provisioning. Includes VPC setup, EKS clusters, RDS databases, security groups, and IAM roles. All modules follow AWS Well-Architected Framework principles and include comprehensive documentation, testing, and validation.",
        technologies: &["Terraform", "AWS", "VPC", "EKS", "RDS", "IAM"],
        features: &[
            "Modular jenkins and Terraform configuration",
            "AWS Well-Architected compliance",
            "Multi-environment support",
            "Security best practices",
            "Cost optimization strategies",
            "Automated testing and validation",
        ],
        github_url: Some(
            "https://github.com/jyothiram266/devops-projects/tree/master/Deploy-to-Kubernetes-Using-Jenkins",
        ),
        live_url: None,
        category: ProjectCategory::Cloud,
        status: ProjectStatus::Completed,
    },
];

// =============================================================================
// Skills
// =============================================================================

const fn skill(
    name: &'static str,
    level: u8,
    category: SkillCategory,
    description: &'static str,
) -> Skill {
    Skill {
        name,
        level,
        category,
        description,
    }
}

use super::SkillCategory::{Cloud, Databases, Devops, Languages, Monitoring, Security};

pub const SKILLS: &[Skill] = &[
    skill("Python", 90, Languages, "Automation, scripting, and backend development"),
    skill("Golang", 85, Languages, "Microservices and cloud-native applications"),
    skill("JavaScript", 80, Languages, "Full-stack web development and automation"),
    skill("SQL", 85, Languages, "Database design and complex queries"),
    skill("Bash/Shell", 90, Languages, "System administration and automation"),
    skill("AWS EKS", 90, Cloud, "Kubernetes on AWS with advanced configurations"),
    skill("AWS EC2", 85, Cloud, "Compute instances and auto-scaling"),
    skill("AWS RDS", 80, Cloud, "Managed database services and migrations"),
    skill("AWS S3", 85, Cloud, "Object storage and static website hosting"),
    skill("AWS VPC", 80, Cloud, "Network architecture and security groups"),
    skill("Kubernetes", 90, Devops, "Container orchestration and management"),
    skill("Docker", 90, Devops, "Containerization and multi-stage builds"),
    skill("Terraform", 85, Devops, "Infrastructure as Code and state management"),
    skill("Helm", 85, Devops, "Kubernetes package manager and templating"),
    skill("ArgoCD", 80, Devops, "GitOps continuous delivery"),
    skill("GitHub Actions", 85, Devops, "CI/CD pipelines and automation"),
    skill("Jenkins", 75, Devops, "Build automation and pipelines"),
    skill("Ansible", 80, Devops, "Configuration management and automation"),
    skill("PostgreSQL", 85, Databases, "Advanced queries and performance tuning"),
    skill("MongoDB", 75, Databases, "NoSQL database design and operations"),
    skill("Redis", 70, Databases, "Caching and session management"),
    skill("Prometheus", 85, Monitoring, "Metrics collection and alerting"),
    skill("Grafana", 85, Monitoring, "Data visualization and dashboards"),
    skill("Loki", 80, Monitoring, "Log aggregation and analysis"),
    skill("AlertManager", 75, Monitoring, "Alert routing and notification"),
    skill("IAM", 80, Security, "Identity and access management"),
    skill("Security Scanning", 75, Security, "Vulnerability assessment and remediation"),
    skill("Network Security", 75, Security, "Firewall rules and network policies"),
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Cloud Practitioner",
        issuer: "Amazon Web Services",
        year: "2024",
        score: None,
        verified: true,
    },
    Certification {
        name: "KodeKloud Engineer",
        issuer: "KodeKloud",
        year: "2024",
        score: Some("45,000 XP"),
        verified: true,
    },
];

pub const CURRENTLY_LEARNING: &[&str] = &[
    "Advanced Kubernetes Security",
    "Service Mesh with Istio",
    "GitOps with Flux",
    "Site Reliability Engineering",
];

// =============================================================================
// Achievements
// =============================================================================

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "titan-top75",
        title: "The Titan - Top 75 Coders",
        description: "Recognized as one of the top 75 coders in HackOn with Amazon Season 4",
        category: AchievementCategory::Hackathon,
        date: "Season 4",
        details: &[
            "Competed against 10,000+ developers nationwide",
            "Demonstrated exceptional problem-solving skills",
            "Built innovative solutions using AWS services",
            "Showcased leadership in team collaboration",
        ],
    },
    Achievement {
        id: "aws-certified",
        title: "AWS Certified Cloud Practitioner",
        description: "Official AWS certification demonstrating cloud computing knowledge",
        category: AchievementCategory::Certification,
        date: "2024",
        details: &[
            "Comprehensive understanding of AWS services",
            "Cloud architecture best practices",
            "Security and compliance in cloud environments",
            "Cost optimization strategies",
        ],
    },
    Achievement {
        id: "kodekloud-engineer",
        title: "KodeKloud Engineer - 45,000 XP",
        description: "Junior DevOps Engineer certification with outstanding practical score",
        category: AchievementCategory::Certification,
        date: "2024",
        details: &[
            "Hands-on DevOps challenges and labs",
            "Real-world scenario problem solving",
            "Infrastructure automation expertise",
            "Container orchestration mastery",
        ],
    },
    Achievement {
        id: "platform-optimization",
        title: "Infrastructure Performance Boost",
        description: "Achieved 40% deployment time reduction and 20% latency improvement",
        category: AchievementCategory::Project,
        date: "2025",
        details: &[
            "Optimized CI/CD pipelines with GitHub Actions",
            "Implemented Traefik reverse proxy",
            "Automated release management",
            "Enhanced monitoring and alerting",
        ],
    },
    Achievement {
        id: "cloud-architecture",
        title: "Cloud-Native Architecture Excellence",
        description: "Successfully designed and deployed scalable ML platform infrastructure",
        category: AchievementCategory::Project,
        date: "2024",
        details: &[
            "Kubernetes-based ML inference platform",
            "Auto-scaling capabilities for high traffic",
            "Multi-model deployment support",
            "Comprehensive monitoring integration",
        ],
    },
    Achievement {
        id: "team-leadership",
        title: "Cross-functional Team Leadership",
        description: "Led DevOps initiatives across multiple teams and projects",
        category: AchievementCategory::Recognition,
        date: "2024-2025",
        details: &[
            "Mentored junior developers in DevOps practices",
            "Facilitated knowledge sharing sessions",
            "Established DevOps best practices",
            "Improved team productivity and collaboration",
        ],
    },
];

// =============================================================================
// Contact
// =============================================================================

pub const CONTACT_INFO: &[Link] = &[
    Link {
        label: "Email",
        value: "jyothiram261@gmail.com",
        href: "mailto:jyothiram261@gmail.com",
    },
    Link {
        label: "Phone",
        value: "+91-8074728123",
        href: "tel:+918074728123",
    },
    Link {
        label: "Location",
        value: "Karnataka, India",
        href: "#",
    },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        value: "@jyothiram",
        href: "https://github.com/jyothiram",
    },
    Link {
        label: "LinkedIn",
        value: "/in/jyothi-ram",
        href: "https://linkedin.com/in/jyothi-ram",
    },
    Link {
        label: "Portfolio",
        value: "jyothiram.dev",
        href: "https://jyothiram.dev",
    },
    Link {
        label: "Hashnode",
        value: "@jyothiram",
        href: "https://hashnode.com/@jyothiram",
    },
];
