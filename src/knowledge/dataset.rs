//! Reference data for [`super::BuiltinKnowledge`]
//!
//! Department directory, helplines, priority keywords, reply templates and
//! complaint patterns for Uttar Pradesh government services.

use crate::models::{Category, Priority};

pub(super) struct DepartmentSeed {
    pub name: &'static str,
    pub category: Category,
    pub head: &'static str,
    pub contact: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub services: &'static [&'static str],
    pub response_time: &'static str,
    pub emergency_contact: &'static str,
    pub keywords: &'static [&'static str],
}

type Scoped = &'static [(&'static str, &'static [&'static str])];
type ByPriority = &'static [(Priority, &'static [&'static str])];

pub(super) const DEPARTMENTS: &[DepartmentSeed] = &[
    DepartmentSeed {
        name: "Public Works",
        category: Category::Infrastructure,
        head: "Chief Engineer PWD",
        contact: "0522-2237582",
        email: "ce-pwd-up@gov.in",
        address: "PWD Bhawan, Gomti Nagar, Lucknow - 226010",
        services: &[
            "Road Construction", "Bridge Maintenance", "Street Lights", "Public Buildings",
            "Drainage Systems", "Footpaths", "Traffic Signals", "Bus Stops", "Public Toilets",
        ],
        response_time: "3-7 days",
        emergency_contact: "1800-180-4334",
        keywords: &[
            "road", "bridge", "street light", "pothole", "drainage", "construction",
            "footpath", "signal", "building", "repair",
        ],
    },
    DepartmentSeed {
        name: "Water Supply",
        category: Category::Utilities,
        head: "Chief Engineer UP Jal Nigam",
        contact: "0522-2623404",
        email: "upjn@up.gov.in",
        address: "UP Jal Nigam, Vibhuti Khand, Gomti Nagar, Lucknow - 226010",
        services: &[
            "Water Supply", "Sewerage", "Water Quality Testing", "New Connections",
            "Pipe Repairs", "Water Treatment", "Bore Wells", "Hand Pumps", "Water Tankers",
        ],
        response_time: "24-48 hours",
        emergency_contact: "1800-180-5555",
        keywords: &[
            "water", "pipe", "leak", "supply", "quality", "sewage", "connection", "bore",
            "pump", "tanker", "treatment",
        ],
    },
    DepartmentSeed {
        name: "Traffic Police",
        category: Category::Traffic,
        head: "Additional DGP Traffic",
        contact: "0522-2620173",
        email: "traffic@up.gov.in",
        address: "Traffic Headquarters, Hazratganj, Lucknow - 226001",
        services: &[
            "Traffic Management", "Challan Services", "License Verification",
            "Vehicle Registration", "Road Safety", "Accident Investigation",
            "Parking Management", "Signal Control", "Speed Control",
        ],
        response_time: "30 minutes",
        emergency_contact: "100",
        keywords: &[
            "traffic", "signal", "accident", "challan", "license", "parking", "violation",
            "speed", "vehicle", "registration",
        ],
    },
    DepartmentSeed {
        name: "Environment",
        category: Category::Environment,
        head: "Secretary Environment Department",
        contact: "0522-2239296",
        email: "env@up.gov.in",
        address: "Environment Department, Lal Bahadur Shastri Bhawan, Lucknow - 226001",
        services: &[
            "Pollution Control", "Waste Management", "Tree Plantation",
            "Air Quality Monitoring", "Noise Control", "Industrial Monitoring",
            "Green Belt Development", "Environmental Clearance",
        ],
        response_time: "24-48 hours",
        emergency_contact: "1800-180-4999",
        keywords: &[
            "pollution", "waste", "garbage", "environment", "noise", "air quality", "tree",
            "industrial", "smoke", "dumping",
        ],
    },
    DepartmentSeed {
        name: "Healthcare",
        category: Category::Healthcare,
        head: "Director General Medical Health",
        contact: "0522-2237515",
        email: "dgmh@up.gov.in",
        address: "Directorate of Medical Health, Swasthya Bhawan, Lucknow - 226001",
        services: &[
            "Public Health Services", "Hospital Management", "Medical Services",
            "Emergency Care", "Vaccination Programs", "Disease Control", "Maternal Health",
            "Child Health", "Ambulance Services",
        ],
        response_time: "24 hours",
        emergency_contact: "108",
        keywords: &[
            "health", "hospital", "medical", "doctor", "medicine", "emergency", "patient",
            "ambulance", "vaccination", "disease",
        ],
    },
    DepartmentSeed {
        name: "Education",
        category: Category::Education,
        head: "Director Basic Education",
        contact: "0522-2237456",
        email: "dbe@up.gov.in",
        address: "Basic Education Department, Shiksha Sankul, Lucknow - 226007",
        services: &[
            "School Management", "Teacher Training", "Student Welfare",
            "Infrastructure Development", "Mid-day Meal", "Scholarship Programs",
            "Examination Conduct", "Curriculum Development",
        ],
        response_time: "24 hours",
        emergency_contact: "1800-180-5678",
        keywords: &[
            "school", "teacher", "student", "education", "exam", "admission", "scholarship",
            "meal", "book", "uniform",
        ],
    },
    DepartmentSeed {
        name: "Revenue",
        category: Category::Other,
        head: "Board of Revenue Chairman",
        contact: "0522-2237890",
        email: "revenue@up.gov.in",
        address: "Board of Revenue, Lucknow - 226001",
        services: &[
            "Land Records", "Property Registration", "Revenue Collection", "Mutation Services",
            "Survey Settlement", "Land Acquisition",
        ],
        response_time: "3-5 days",
        emergency_contact: "1800-180-6789",
        keywords: &[
            "land", "property", "registration", "mutation", "revenue", "record", "survey",
            "acquisition", "settlement",
        ],
    },
    DepartmentSeed {
        name: "Agriculture",
        category: Category::Other,
        head: "Director Agriculture",
        contact: "0522-2237123",
        email: "agriculture@up.gov.in",
        address: "Agriculture Department, Krishi Bhawan, Lucknow - 226001",
        services: &[
            "Crop Advisory", "Fertilizer Distribution", "Seed Supply", "Irrigation Support",
            "Farmer Training", "Subsidy Schemes",
        ],
        response_time: "2-3 days",
        emergency_contact: "1800-180-1551",
        keywords: &[
            "crop", "fertilizer", "seed", "irrigation", "farmer", "subsidy", "agriculture",
            "farming", "harvest",
        ],
    },
    DepartmentSeed {
        name: "Food & Civil Supplies",
        category: Category::Other,
        head: "Food Commissioner",
        contact: "0522-2237234",
        email: "food@up.gov.in",
        address: "Food & Civil Supplies Department, Lucknow - 226001",
        services: &[
            "Ration Card Services", "PDS Management", "Food Security", "Fair Price Shops",
            "Food Grain Distribution",
        ],
        response_time: "24-48 hours",
        emergency_contact: "1800-180-1967",
        keywords: &[
            "ration", "pds", "food", "grain", "shop", "card", "distribution", "supply",
            "quota",
        ],
    },
    DepartmentSeed {
        name: "Social Welfare",
        category: Category::Other,
        head: "Director Social Welfare",
        contact: "0522-2237345",
        email: "socialwelfare@up.gov.in",
        address: "Social Welfare Department, Lucknow - 226001",
        services: &[
            "Pension Schemes", "Disability Services", "Women Welfare", "Child Welfare",
            "Old Age Support", "Widow Pension",
        ],
        response_time: "3-5 days",
        emergency_contact: "1800-180-4567",
        keywords: &[
            "pension", "disability", "women", "child", "welfare", "widow", "old age",
            "support", "scheme",
        ],
    },
];

pub(super) const HELPLINES: &[(&str, &[(&str, &str)])] = &[
    (
        "emergency",
        &[
            ("police", "100"),
            ("fire", "101"),
            ("ambulance", "108"),
            ("disaster_management", "112"),
            ("women_helpline", "1090"),
            ("child_helpline", "1098"),
            ("senior_citizen", "14567"),
            ("tourist_helpline", "1363"),
            ("railway_helpline", "139"),
            ("cyber_crime", "1930"),
        ],
    ),
    (
        "government",
        &[
            ("cm_helpline", "1076"),
            ("anti_corruption", "1064"),
            ("electricity_complaint", "1912"),
            ("gas_emergency", "1906"),
            ("water_complaint", "1916"),
            ("food_adulteration", "1967"),
            ("consumer_helpline", "1800-11-4000"),
            ("pension_helpline", "1800-180-0019"),
            ("employment_helpline", "1800-180-0018"),
        ],
    ),
    (
        "departmental",
        &[
            ("public_works", "1800-180-4334"),
            ("water_supply", "1800-180-5555"),
            ("environment", "1800-180-4999"),
            ("education", "1800-180-5678"),
            ("healthcare", "1800-180-1104"),
            ("agriculture", "1800-180-1551"),
            ("food_civil_supplies", "1800-180-1967"),
            ("social_welfare", "1800-180-4567"),
            ("revenue", "1800-180-6789"),
            ("transport", "1800-180-2877"),
        ],
    ),
    (
        "utilities",
        &[
            ("electricity_uppcl", "1912"),
            ("gas_complaint", "1906"),
            ("telephone_bsnl", "1500"),
            ("internet_complaint", "1504"),
            ("postal_complaint", "1924"),
            ("railway_inquiry", "139"),
            ("airport_inquiry", "1800-180-1407"),
        ],
    ),
    (
        "financial",
        &[
            ("banking_complaint", "1800-11-2211"),
            ("insurance_complaint", "155214"),
            ("pension_query", "1800-180-0019"),
            ("scholarship_query", "1800-180-2020"),
            ("loan_complaint", "1800-11-3377"),
            ("tax_helpline", "1800-180-1961"),
        ],
    ),
    (
        "special_services",
        &[
            ("blood_bank", "104"),
            ("organ_donation", "1800-103-7100"),
            ("mental_health", "1800-599-0019"),
            ("aids_helpline", "1097"),
            ("tobacco_helpline", "1800-11-2356"),
            ("drug_abuse", "1800-11-0031"),
        ],
    ),
];

pub(super) const PRIORITY_KEYWORDS: &[(Priority, Scoped)] = &[
    (
        Priority::Critical,
        &[
            (
                "general",
                &[
                    "emergency", "urgent", "critical", "immediate", "danger",
                    "life threatening", "death", "accident", "fire", "explosion", "collapse",
                    "flood", "disaster", "poisoning", "epidemic", "outbreak", "crisis",
                    "fatal", "serious injury",
                ],
            ),
            (
                "infrastructure",
                &[
                    "bridge collapse", "road cave in", "building collapse", "gas leak",
                    "electrical hazard", "live wire", "structural damage", "foundation crack",
                    "wall falling", "roof collapse", "sinkhole", "landslide",
                ],
            ),
            (
                "water",
                &[
                    "water contamination", "cholera outbreak", "poisoned water",
                    "no water for days", "sewage overflow", "water borne disease",
                    "pipeline burst", "flood", "drinking water crisis", "water emergency",
                ],
            ),
            (
                "traffic",
                &[
                    "fatal accident", "hit and run", "traffic accident", "road accident",
                    "signal not working", "traffic jam emergency", "ambulance blocked",
                    "fire truck blocked", "emergency vehicle access",
                ],
            ),
            (
                "environment",
                &[
                    "toxic gas", "chemical spill", "industrial accident",
                    "air pollution emergency", "water pollution crisis", "hazardous waste",
                    "radiation leak", "environmental disaster", "mass fish death",
                    "toxic fumes",
                ],
            ),
            (
                "healthcare",
                &[
                    "medical emergency", "patient dying", "ambulance not coming",
                    "doctor not available", "medicine shortage", "epidemic outbreak",
                    "hospital emergency", "life support failure", "blood shortage",
                ],
            ),
            (
                "education",
                &[
                    "student safety", "building collapse", "fire in school", "child missing",
                    "food poisoning", "violence in school", "sexual harassment",
                    "bullying incident", "teacher misconduct", "student injury",
                ],
            ),
        ],
    ),
    (
        Priority::High,
        &[
            (
                "general",
                &[
                    "important", "serious", "major", "significant", "severe", "bad condition",
                    "deteriorating", "worsening", "affecting many people", "public safety",
                    "health risk", "safety concern", "repeated problem", "ongoing issue",
                ],
            ),
            (
                "infrastructure",
                &[
                    "pothole causing accidents", "street lights not working", "road damage",
                    "bridge repair needed", "drainage blocked", "public building damage",
                    "footpath broken", "signal malfunction", "construction delay",
                ],
            ),
            (
                "water",
                &[
                    "irregular water supply", "low pressure", "dirty water", "pipe leakage",
                    "water quality poor", "sewage problem", "no water supply",
                    "contaminated water", "water shortage", "billing error",
                ],
            ),
            (
                "traffic",
                &[
                    "traffic congestion", "signal timing wrong", "parking problem",
                    "rash driving", "speed limit violation", "illegal parking",
                    "traffic rule violation", "road safety issue", "pedestrian safety",
                ],
            ),
            (
                "environment",
                &[
                    "air pollution", "noise pollution", "garbage not collected",
                    "industrial pollution", "water pollution", "illegal dumping",
                    "tree cutting", "waste management", "pollution monitoring",
                ],
            ),
            (
                "healthcare",
                &[
                    "doctor absent", "medicine not available", "long waiting time",
                    "poor treatment", "hospital cleanliness", "equipment not working",
                    "staff behavior", "ambulance delay", "health services poor",
                ],
            ),
            (
                "education",
                &[
                    "teacher absent", "poor infrastructure", "no books", "meal quality poor",
                    "toilet facility poor", "no drinking water", "classroom condition",
                    "teacher shortage", "examination delay", "admission problem",
                ],
            ),
        ],
    ),
    (
        Priority::Medium,
        &[
            (
                "general",
                &[
                    "complaint", "problem", "issue", "concern", "difficulty", "trouble",
                    "not working", "not functioning", "delayed", "pending", "slow",
                    "inefficient", "poor service", "needs improvement", "request",
                ],
            ),
            (
                "infrastructure",
                &[
                    "maintenance required", "repair needed", "improvement needed",
                    "construction quality", "design issue", "planning problem",
                    "accessibility issue", "beautification needed", "upgrade required",
                ],
            ),
            (
                "water",
                &[
                    "connection delay", "meter reading", "billing query", "pressure issue",
                    "timing problem", "quality concern", "new connection", "transfer request",
                    "documentation issue", "procedure query",
                ],
            ),
            (
                "traffic",
                &[
                    "license issue", "registration problem", "challan query",
                    "documentation delay", "procedure clarification", "rule query",
                    "permit issue", "fitness certificate", "transfer process",
                ],
            ),
            (
                "environment",
                &[
                    "awareness needed", "plantation request", "cleanliness drive",
                    "recycling facility", "green cover", "park maintenance", "beautification",
                    "environmental education", "conservation",
                ],
            ),
            (
                "healthcare",
                &[
                    "appointment delay", "procedure query", "documentation issue",
                    "insurance problem", "referral delay", "test report delay",
                    "facility improvement", "service enhancement", "information needed",
                ],
            ),
            (
                "education",
                &[
                    "admission query", "fee issue", "documentation delay", "transfer request",
                    "scholarship query", "examination query", "certificate issue",
                    "procedure clarification", "information needed",
                ],
            ),
        ],
    ),
    (
        Priority::Low,
        &[
            (
                "general",
                &[
                    "minor", "small", "little", "slight", "cosmetic", "suggestion",
                    "recommendation", "feedback", "opinion", "idea", "proposal", "enhancement",
                    "feature request", "general query", "information",
                ],
            ),
            (
                "infrastructure",
                &[
                    "aesthetic improvement", "minor repair", "cosmetic change",
                    "beautification suggestion", "design enhancement", "comfort improvement",
                    "convenience feature", "accessibility enhancement", "user experience",
                ],
            ),
            (
                "water",
                &[
                    "information query", "general question", "procedure inquiry",
                    "rate information", "scheme details", "application process",
                    "documentation requirement", "eligibility criteria", "contact information",
                ],
            ),
            (
                "traffic",
                &[
                    "information request", "procedure query", "rule clarification",
                    "documentation requirement", "application process", "fee structure",
                    "contact information", "office timing", "online service",
                ],
            ),
            (
                "environment",
                &[
                    "information request", "awareness query", "program details",
                    "participation opportunity", "volunteer opportunity",
                    "educational material", "contact information", "scheme details",
                    "procedure inquiry",
                ],
            ),
            (
                "healthcare",
                &[
                    "information query", "procedure inquiry", "scheme details",
                    "eligibility criteria", "application process", "contact information",
                    "timing inquiry", "service availability", "general guidance",
                ],
            ),
            (
                "education",
                &[
                    "information request", "procedure query", "scheme details",
                    "eligibility criteria", "application process", "contact information",
                    "admission procedure", "fee structure", "course information",
                ],
            ),
        ],
    ),
];

pub(super) const RESPONSE_TEMPLATES: &[(Category, ByPriority)] = &[
    (
        Category::Infrastructure,
        &[
            (
                Priority::Critical,
                &[
                    "🚨 URGENT: Your critical infrastructure complaint has been marked as emergency priority. Contact Public Works immediately at 0522-2237582 or emergency number 1800-180-4334. Our engineering team will respond within 4 hours for safety assessment.",
                    "🚨 CRITICAL ALERT: This infrastructure safety issue requires immediate attention. Public Works Department emergency team contacted at 1800-180-4334. Expected response: 2-4 hours. Your complaint ID: {complaint_id}",
                    "🚨 EMERGENCY RESPONSE: Critical infrastructure issue logged. Contact Chief Engineer PWD at 0522-2237582. Emergency repair team dispatched. Safety measures being implemented immediately.",
                ],
            ),
            (
                Priority::High,
                &[
                    "⚡ HIGH PRIORITY: Your infrastructure complaint has been forwarded to Public Works Department with high priority status. Contact: 0522-2237582, Emergency: 1800-180-4334. Expected resolution: 24-48 hours.",
                    "⚡ URGENT ATTENTION: Infrastructure issue marked as high priority. Public Works engineering team will assess within 24 hours. Contact: 0522-2237582 for updates.",
                    "⚡ PRIORITY CASE: Your infrastructure concern is being expedited. Public Works Department contacted at 0522-2237582. Site inspection scheduled within 24 hours.",
                ],
            ),
            (
                Priority::Medium,
                &[
                    "Thank you for reporting this infrastructure issue. Your complaint has been forwarded to the Public Works Department. Contact: 0522-2237582, Emergency: 1800-180-4334. Expected resolution time: 3-7 days.",
                    "Infrastructure complaint received and logged with Public Works Department. Our engineering team will assess the situation. Contact: 0522-2237582. Timeline: 3-7 business days.",
                    "Your infrastructure concern has been registered with PWD. Contact Chief Engineer at 0522-2237582 for status updates. Expected action: 3-7 days.",
                ],
            ),
            (
                Priority::Low,
                &[
                    "Thank you for your infrastructure feedback. This has been noted by the Public Works Department for routine maintenance. Contact: 0522-2237582. Expected timeline: 7-14 days.",
                    "Infrastructure maintenance request logged with PWD. This will be included in the next maintenance cycle. Contact: 0522-2237582 for information.",
                    "Your infrastructure suggestion has been forwarded to Public Works for consideration in upcoming projects. Contact: 0522-2237582.",
                ],
            ),
        ],
    ),
    (
        Category::Utilities,
        &[
            (
                Priority::Critical,
                &[
                    "🚨 WATER EMERGENCY: Critical water supply issue reported. UP Jal Nigam emergency team contacted at 1800-180-5555. Immediate response within 2-4 hours. Alternative water arrangements being made.",
                    "🚨 URGENT WATER ISSUE: Emergency response activated for water crisis. Contact UP Jal Nigam at 0522-2623404 or emergency 1800-180-5555. Water tanker dispatch initiated.",
                    "🚨 CRITICAL ALERT: Water supply emergency logged. Chief Engineer UP Jal Nigam contacted. Emergency repair team mobilized. Contact: 1800-180-5555 for immediate assistance.",
                ],
            ),
            (
                Priority::High,
                &[
                    "⚡ HIGH PRIORITY: Water supply complaint marked urgent. UP Jal Nigam technical team will respond within 6-12 hours. Contact: 0522-2623404, Emergency: 1800-180-5555.",
                    "⚡ URGENT WATER ISSUE: Your complaint has been escalated to UP Jal Nigam. Priority repair scheduled within 12 hours. Contact: 0522-2623404 for updates.",
                    "⚡ PRIORITY RESPONSE: Water supply problem being addressed urgently. UP Jal Nigam contacted at 0522-2623404. Expected resolution: 12-24 hours.",
                ],
            ),
            (
                Priority::Medium,
                &[
                    "Your water supply complaint has been received by UP Jal Nigam. Technical team will investigate and resolve within 24-48 hours. Contact: 0522-2623404, Emergency: 1800-180-5555.",
                    "Water supply issue logged with UP Jal Nigam. Our technical staff will assess and repair within 24-48 hours. Contact: 0522-2623404 for status updates.",
                    "Thank you for reporting the water supply problem. UP Jal Nigam will address this within 24-48 hours. Contact: 0522-2623404.",
                ],
            ),
            (
                Priority::Low,
                &[
                    "Water supply feedback received by UP Jal Nigam. This will be addressed in routine maintenance. Contact: 0522-2623404. Timeline: 3-5 days.",
                    "Your water supply concern has been noted for scheduled maintenance. UP Jal Nigam will include this in upcoming work. Contact: 0522-2623404.",
                    "Water supply improvement suggestion forwarded to UP Jal Nigam for consideration. Contact: 0522-2623404 for information.",
                ],
            ),
        ],
    ),
    (
        Category::Traffic,
        &[
            (
                Priority::Critical,
                &[
                    "🚨 TRAFFIC EMERGENCY: Critical traffic safety issue reported. Traffic Police emergency response activated. Contact: 100 immediately. Traffic control team dispatched to location.",
                    "🚨 URGENT TRAFFIC ALERT: Emergency traffic situation logged. Contact Traffic Police at 100 or 0522-2620173. Immediate traffic management measures being implemented.",
                    "🚨 CRITICAL TRAFFIC ISSUE: Emergency response for traffic safety concern. Traffic Police contacted at 100. Safety measures being deployed immediately.",
                ],
            ),
            (
                Priority::High,
                &[
                    "⚡ HIGH PRIORITY: Traffic complaint marked urgent. Traffic Police will respond within 30 minutes. Contact: 0522-2620173, Emergency: 100. Traffic management team alerted.",
                    "⚡ URGENT TRAFFIC ISSUE: Your complaint has been escalated to Traffic Police. Priority response within 30 minutes. Contact: 0522-2620173.",
                    "⚡ PRIORITY ALERT: Traffic safety concern being addressed urgently. Traffic Police contacted at 0522-2620173. Expected response: 30 minutes.",
                ],
            ),
            (
                Priority::Medium,
                &[
                    "Your traffic complaint has been forwarded to UP Traffic Police. They will investigate and take action within 2-4 hours. Contact: 0522-2620173, Emergency: 100.",
                    "Traffic issue logged with Traffic Police Department. Our traffic management team will address this within 2-4 hours. Contact: 0522-2620173.",
                    "Thank you for reporting the traffic problem. Traffic Police will take appropriate action within 2-4 hours. Contact: 0522-2620173.",
                ],
            ),
            (
                Priority::Low,
                &[
                    "Traffic feedback received by Traffic Police. This will be considered for traffic improvement measures. Contact: 0522-2620173. Timeline: 1-2 days.",
                    "Your traffic suggestion has been forwarded to Traffic Police for evaluation. Contact: 0522-2620173 for information.",
                    "Traffic improvement suggestion noted by Traffic Police Department. This will be reviewed for implementation. Contact: 0522-2620173.",
                ],
            ),
        ],
    ),
    (
        Category::Environment,
        &[
            (
                Priority::Critical,
                &[
                    "🚨 ENVIRONMENTAL EMERGENCY: Critical pollution issue reported. Environment Department emergency team contacted at 1800-180-4999. Immediate inspection within 4-6 hours.",
                    "🚨 URGENT ENVIRONMENTAL ALERT: Serious environmental concern logged. Contact Environment Department at 0522-2239296 or emergency 1800-180-4999. Priority investigation initiated.",
                    "🚨 CRITICAL POLLUTION ISSUE: Environmental emergency response activated. UP Pollution Control Board contacted. Immediate action within 4-6 hours.",
                ],
            ),
            (
                Priority::High,
                &[
                    "⚡ HIGH PRIORITY: Environmental complaint marked urgent. Environment Department will inspect within 12-24 hours. Contact: 0522-2239296, Emergency: 1800-180-4999.",
                    "⚡ URGENT ENVIRONMENTAL ISSUE: Your complaint escalated to Environment Department. Priority inspection scheduled within 24 hours. Contact: 0522-2239296.",
                    "⚡ PRIORITY RESPONSE: Environmental concern being addressed urgently. Environment Department contacted at 0522-2239296. Expected inspection: 24 hours.",
                ],
            ),
            (
                Priority::Medium,
                &[
                    "Your environmental complaint has been logged with the Environment Department. Inspection will be conducted within 24-48 hours. Contact: 0522-2239296, Emergency: 1800-180-4999.",
                    "Environmental concern received by Environment Department. Our environmental team will assess within 24-48 hours. Contact: 0522-2239296.",
                    "Thank you for reporting the environmental issue. Environment Department will investigate within 24-48 hours. Contact: 0522-2239296.",
                ],
            ),
            (
                Priority::Low,
                &[
                    "Environmental feedback received by Environment Department. This will be included in routine monitoring. Contact: 0522-2239296. Timeline: 3-5 days.",
                    "Your environmental suggestion has been forwarded to Environment Department for consideration. Contact: 0522-2239296.",
                    "Environmental improvement suggestion noted by Environment Department. This will be reviewed for action. Contact: 0522-2239296.",
                ],
            ),
        ],
    ),
    (
        Category::Healthcare,
        &[
            (
                Priority::Critical,
                &[
                    "🚨 MEDICAL EMERGENCY: Critical healthcare issue reported. Contact emergency services at 108 immediately. Medical emergency team alerted. Director Medical Health contacted at 0522-2237515.",
                    "🚨 URGENT MEDICAL ALERT: Healthcare emergency logged. Contact 108 for immediate medical assistance. Healthcare Department emergency response activated.",
                    "🚨 CRITICAL HEALTH ISSUE: Medical emergency response initiated. Contact ambulance at 108. Healthcare Department contacted at 0522-2237515 for immediate action.",
                ],
            ),
            (
                Priority::High,
                &[
                    "⚡ HIGH PRIORITY: Healthcare complaint marked urgent. Medical officer will respond within 2-4 hours. Contact: 0522-2237515, Emergency: 108.",
                    "⚡ URGENT MEDICAL ISSUE: Your complaint escalated to Healthcare Department. Priority medical attention within 4 hours. Contact: 0522-2237515.",
                    "⚡ PRIORITY MEDICAL RESPONSE: Healthcare concern being addressed urgently. Medical team contacted at 0522-2237515. Expected response: 2-4 hours.",
                ],
            ),
            (
                Priority::Medium,
                &[
                    "Your healthcare complaint has been forwarded to the Healthcare Department. Medical officer will review within 24 hours. Contact: 0522-2237515, Emergency: 108.",
                    "Healthcare concern received by Medical Health Department. Our medical team will address within 24 hours. Contact: 0522-2237515.",
                    "Thank you for reporting the healthcare issue. Healthcare Department will investigate within 24 hours. Contact: 0522-2237515.",
                ],
            ),
            (
                Priority::Low,
                &[
                    "Healthcare feedback received by Healthcare Department. This will be reviewed for service improvement. Contact: 0522-2237515. Timeline: 2-3 days.",
                    "Your healthcare suggestion has been forwarded to Healthcare Department for consideration. Contact: 0522-2237515.",
                    "Healthcare improvement suggestion noted by Medical Health Department. This will be evaluated for implementation. Contact: 0522-2237515.",
                ],
            ),
        ],
    ),
    (
        Category::Education,
        &[
            (
                Priority::Critical,
                &[
                    "🚨 EDUCATION EMERGENCY: Critical student safety issue reported. Education Department emergency team contacted. Contact: 0522-2237456 or emergency 1800-180-5678. Immediate action within 2-4 hours.",
                    "🚨 URGENT EDUCATION ALERT: Student safety concern logged as emergency. Contact Education Department at 0522-2237456. Priority response initiated.",
                    "🚨 CRITICAL SCHOOL ISSUE: Educational emergency response activated. Director Basic Education contacted. Immediate intervention within 4 hours.",
                ],
            ),
            (
                Priority::High,
                &[
                    "⚡ HIGH PRIORITY: Education complaint marked urgent. Educational officer will respond within 12-24 hours. Contact: 0522-2237456, Emergency: 1800-180-5678.",
                    "⚡ URGENT EDUCATION ISSUE: Your complaint escalated to Education Department. Priority investigation within 24 hours. Contact: 0522-2237456.",
                    "⚡ PRIORITY RESPONSE: Educational concern being addressed urgently. Education Department contacted at 0522-2237456. Expected action: 24 hours.",
                ],
            ),
            (
                Priority::Medium,
                &[
                    "Your education complaint has been sent to the Education Department. Educational officer will investigate within 24-48 hours. Contact: 0522-2237456, Emergency: 1800-180-5678.",
                    "Educational concern received by Basic Education Department. Our educational team will address within 24-48 hours. Contact: 0522-2237456.",
                    "Thank you for reporting the educational issue. Education Department will investigate within 24-48 hours. Contact: 0522-2237456.",
                ],
            ),
            (
                Priority::Low,
                &[
                    "Educational feedback received by Education Department. This will be considered for improvement measures. Contact: 0522-2237456. Timeline: 3-5 days.",
                    "Your educational suggestion has been forwarded to Education Department for review. Contact: 0522-2237456.",
                    "Educational improvement suggestion noted by Education Department. This will be evaluated for implementation. Contact: 0522-2237456.",
                ],
            ),
        ],
    ),
];

pub(super) const COMPLAINT_PATTERNS: &[(Category, &[&str])] = &[
    (
        Category::Infrastructure,
        &[
            "Road repair needed urgently in my area",
            "Waterlogging on road during rain",
            "Speed breakers needed on busy road",
            "Broken street light poles",
            "Frequent power cuts in street lights",
            "Drainage system blocked causing waterlogging",
            "Broken drain covers dangerous",
            "Illegal connections blocking drains",
            "Government office building needs repair",
            "Public toilet facility not maintained",
        ],
    ),
    (
        Category::Utilities,
        &[
            "No water supply for 3 days",
            "No water in overhead tank",
            "Water tanker not coming regularly",
            "Muddy water coming from taps",
            "Water color changed to yellow",
            "Pipe leakage wasting water on street",
            "Illegal water connections",
            "Water billing errors",
            "Sewage treatment plant not working",
            "Sewage pipe burst",
        ],
    ),
    (
        Category::Traffic,
        &[
            "Traffic signal not working at busy intersection",
            "Broken traffic lights causing confusion",
            "Traffic diversion causing problems",
            "Vehicles parked on footpath",
            "Heavy vehicles parked in residential area",
            "Rash driving causing accidents",
            "Overloaded vehicles on roads",
            "Accident prone area needs attention",
            "Fitness certificate not issued",
            "Duplicate license application pending",
        ],
    ),
    (
        Category::Environment,
        &[
            "Garbage not collected for days",
            "Plastic waste not managed properly",
            "Composting facility not working",
            "Vehicle pollution increasing",
            "Smog affecting visibility",
            "Noise pollution from construction",
            "Generator noise in residential area",
            "Market noise levels high",
            "Park maintenance very poor",
            "No green cover in industrial area",
        ],
    ),
    (
        Category::Healthcare,
        &[
            "Doctor not available at government hospital",
            "Hospital staff behavior rude",
            "Hospital beds not sufficient",
            "Expensive treatment in government hospital",
            "Blood bank shortage",
            "Ambulance service not responding",
            "Emergency helpline not working",
            "Blood not available for emergency",
            "Maternal health services poor",
            "Mental health services lacking",
        ],
    ),
    (
        Category::Education,
        &[
            "School building in poor condition",
            "Playground not maintained",
            "Library not properly equipped",
            "Teacher behavior inappropriate",
            "Substitute teacher not arranged",
            "Books not provided to students",
            "Admission process complicated",
            "Transfer certificate delayed",
            "Transportation facility not available",
            "Special needs support lacking",
        ],
    ),
];
