//! Built-in analysis catalog.
//!
//! The report content is authored by hand and compiled into the binary;
//! nothing is fetched at runtime.

use ghdiscuss_shared::{Categories, Section, Topic};

// Section titles shared by every topic.
const CORE_PROBLEM: &str = "핵심 문제";
const SOLUTION_APPROACH: &str = "솔루션 접근법";
const USE_CASES: &str = "사용 사례";
const SYSTEM_ARCHITECTURE: &str = "시스템 아키텍처";
const TECH_STACK: &str = "기술 스택";
const CORE_COMPONENTS: &str = "핵심 구성요소";
const OVERALL_FLOW: &str = "전체 흐름";
const ASYNC_PROCESSING: &str = "비동기 처리";
const DATA_STRUCTURE: &str = "데이터 구조";
const DOC_STRUCTURE: &str = "문서 구조";
const DOC_PHILOSOPHY: &str = "문서화 철학";
const COMMUNITY_SUPPORT: &str = "커뮤니티 지원";

/// The fixed topic list, in report order.
pub fn builtin_topics() -> Vec<Topic> {
    vec![valdi(), react_19(), n8n()]
}

fn valdi() -> Topic {
    Topic {
        name: "Valdi".into(),
        stars: 13_434,
        category: "크로스플랫폼 UI 프레임워크".into(),
        categories: Categories {
            problem_definition: vec![
                Section::text(
                    CORE_PROBLEM,
                    "크로스플랫폼 개발에서 속도와 런타임 성능 사이의 트레이드오프. \
                     웹뷰 기반 프레임워크들은 네이티브 성능을 확보하지 못하고, JavaScript 브리지 의존으로 \
                     통신 오버헤드가 발생하며, 느린 컴파일 사이클로 개발 속도가 저하됩니다.",
                ),
                Section::text(
                    SOLUTION_APPROACH,
                    "TypeScript로 작성된 선언형 UI를 네이티브 뷰로 직접 컴파일하여 웹뷰나 JS 브리지 없이 \
                     진정한 네이티브 성능을 제공합니다. Snap의 프로덕션 앱에서 8년간 검증된 솔루션입니다.",
                ),
                Section::bullets(
                    USE_CASES,
                    [
                        "크로스플랫폼 모바일 앱 개발 (iOS, Android, macOS)",
                        "고성능이 요구되는 네이티브 앱 개발",
                        "빠른 프로토타입 및 Hot Reload를 통한 반복 개발",
                    ],
                ),
            ],
            architecture: vec![
                Section::code(
                    SYSTEM_ARCHITECTURE,
                    "User Interaction\n    ↓\nTypeScript Event Handlers\n    ↓\n\
                     Component State Update\n    ↓\nC++ Layout Engine\n    ↓\n\
                     Native View Update (Recycled)\n    ↓\nPlatform Rendering",
                ),
                Section::pairs(
                    TECH_STACK,
                    [
                        ("UI 선언", "TypeScript/TSX"),
                        ("Layout Engine", "C++ (메인 스레드 최적화)"),
                        ("Native Bindings", "Swift, Kotlin, Objective-C"),
                        ("Build System", "Valdi CLI + Bazel"),
                        ("개발 도구", "VSCode/Cursor extensions, Hermes Debugger"),
                    ],
                ),
                Section::bullets(
                    CORE_COMPONENTS,
                    [
                        "Automatic view recycling: 글로벌 뷰 풀링으로 인플레이션 지연시간 감소",
                        "Component-level rendering: 부모 재렌더링 없이 독립적 업데이트",
                        "Viewport-aware rendering: 보이는 뷰만 인플레이트",
                        "Optimized C++ layout: 메인 스레드에서 최소 마샬링 오버헤드",
                    ],
                ),
            ],
            data_flow: vec![
                Section::code(
                    OVERALL_FLOW,
                    "[1] Development: TSX → Valdi Compiler → Native Code + Bindings → Hot Reload\n\
                     [2] Runtime: User Action → TS Handlers → State Update → C++ Layout → Native View Update → Platform Render\n\
                     [3] Native Integration: TS ↔ Native API ↔ Type-safe Modules ↔ Protobuf Serialization",
                ),
                Section::text(
                    ASYNC_PROCESSING,
                    "Worker Thread Architecture를 통한 Background JS 실행. \
                     Main Thread ↔ Worker Threads 간 Message Passing 및 Native API 접근 지원.",
                ),
                Section::text(
                    DATA_STRUCTURE,
                    "Type-safe polyglot modules를 통한 양방향 콜백. Protobuf 직렬화로 효율적인 데이터 전송.",
                ),
            ],
            documentation: vec![
                Section::bullets(
                    DOC_STRUCTURE,
                    [
                        "Getting Started: Quick start, Installation, VSCode Setup, Codelabs",
                        "Core Concepts: Component lifecycle, Flexbox layout with RTL, Touch handling, State management",
                        "Advanced: Native bindings, Worker threads, Animations, Protobuf, Full-stack architecture",
                        "Development Workflow: Hot reload, Hermes debugger, Testing, Bazel build",
                        "Performance: View recycling, Profiling guide, Best practices",
                    ],
                ),
                Section::text(
                    DOC_PHILOSOPHY,
                    "실용적(실제 사용 사례 중심), 점진적(기본부터 고급까지), \
                     통합적(API 레퍼런스 + 예제), 커뮤니티 중심(Discord + FAQ)",
                ),
                Section::text(
                    COMMUNITY_SUPPORT,
                    "Discord 커뮤니티 지원, FAQ, 활발한 GitHub 이슈 트래킹",
                ),
            ],
        },
    }
}

fn react_19() -> Topic {
    Topic {
        name: "React 19".into(),
        stars: 234_000,
        category: "JavaScript UI 라이브러리".into(),
        categories: Categories {
            problem_definition: vec![
                Section::text(
                    CORE_PROBLEM,
                    "복잡한 UI 상호작용과 비동기 데이터 처리에서의 성능 및 사용자 경험 문제. \
                     기존 React는 동기적 렌더링으로 인한 블로킹, 복잡한 상태 관리, 서버 컴포넌트 부재 문제가 있었습니다.",
                ),
                Section::text(
                    SOLUTION_APPROACH,
                    "Concurrent Rendering을 통한 비동기 렌더링 개선, Server Components로 서버 측 렌더링 지원, \
                     Actions API로 폼 처리 간소화, use() Hook으로 비동기 데이터 처리 개선.",
                ),
                Section::bullets(
                    USE_CASES,
                    [
                        "대규모 SPA(Single Page Application) 개발",
                        "서버 사이드 렌더링이 필요한 성능 최적화",
                        "복잡한 상태 관리가 필요한 엔터프라이즈 앱",
                    ],
                ),
            ],
            architecture: vec![
                Section::code(
                    SYSTEM_ARCHITECTURE,
                    "User Action\n    ↓\nReact Component\n    ↓\nConcurrent Renderer (Fiber)\n    ↓\n\
                     Virtual DOM Reconciliation\n    ↓\nDOM Update (Batched)\n    ↓\nBrowser Rendering",
                ),
                Section::pairs(
                    TECH_STACK,
                    [
                        ("Core", "JavaScript/TypeScript"),
                        ("Rendering", "Fiber Architecture (Concurrent Mode)"),
                        ("Server", "React Server Components (RSC)"),
                        ("State", "useState, useReducer, Context API"),
                        ("Build", "Vite, Next.js, Create React App"),
                    ],
                ),
                Section::bullets(
                    CORE_COMPONENTS,
                    [
                        "Concurrent Rendering: 우선순위 기반 비동기 렌더링",
                        "Server Components: 서버 측에서 렌더링되는 컴포넌트",
                        "Actions: 폼 제출 및 데이터 변경 처리 간소화",
                        "use() Hook: Promise 및 Resource 직접 처리",
                    ],
                ),
            ],
            data_flow: vec![
                Section::code(
                    OVERALL_FLOW,
                    "Component Render → Virtual DOM 생성 → Reconciliation (차이 계산) → \
                     Commit Phase (DOM 업데이트) → Effects 실행",
                ),
                Section::text(
                    ASYNC_PROCESSING,
                    "Concurrent Mode로 렌더링 작업을 일시 중단하고 우선순위가 높은 작업을 먼저 처리. \
                     Suspense를 통한 비동기 데이터 로딩 처리.",
                ),
                Section::text(
                    DATA_STRUCTURE,
                    "Fiber 트리 구조로 컴포넌트 계층 표현. Virtual DOM으로 효율적인 DOM 업데이트.",
                ),
            ],
            documentation: vec![
                Section::bullets(
                    DOC_STRUCTURE,
                    [
                        "Getting Started: 설치, 기본 개념, 컴포넌트 작성",
                        "Hooks: useState, useEffect, useContext, useMemo, useCallback, use()",
                        "Advanced: Concurrent Features, Server Components, Actions",
                        "Performance: Memoization, Code Splitting, Lazy Loading",
                        "Best Practices: 설계 패턴, 테스팅, 디버깅",
                    ],
                ),
                Section::text(
                    DOC_PHILOSOPHY,
                    "단계별 학습 경로, 상세한 API 문서, 실제 예제 기반 설명, 커뮤니티 피드백 반영",
                ),
                Section::text(
                    COMMUNITY_SUPPORT,
                    "대규모 GitHub 커뮤니티, Stack Overflow, Discord, React Conf 컨퍼런스",
                ),
            ],
        },
    }
}

fn n8n() -> Topic {
    Topic {
        name: "n8n".into(),
        stars: 45_000,
        category: "워크플로우 자동화 플랫폼".into(),
        categories: Categories {
            problem_definition: vec![
                Section::text(
                    CORE_PROBLEM,
                    "비기술자도 복잡한 비즈니스 프로세스를 자동화할 수 있도록 하면서 \
                     개발자는 코드를 통한 확장 가능성을 유지해야 하는 문제. \
                     SaaS 자동화 툴의 비용과 데이터 프라이버시 문제.",
                ),
                Section::text(
                    SOLUTION_APPROACH,
                    "노드 기반 비주얼 워크플로우 에디터로 누구나 쉽게 사용 가능. \
                     350+ 통합 노드 제공, 자체 호스팅 가능, JavaScript/TypeScript로 커스텀 노드 작성 지원.",
                ),
                Section::bullets(
                    USE_CASES,
                    [
                        "API 통합 자동화 (Slack, Google Sheets, GitHub 등)",
                        "데이터 동기화 및 ETL 파이프라인",
                        "비즈니스 프로세스 자동화 (CRM, 마케팅, 판매)",
                    ],
                ),
            ],
            architecture: vec![
                Section::code(
                    SYSTEM_ARCHITECTURE,
                    "User (Visual Editor)\n    ↓\nWorkflow Definition (JSON)\n    ↓\nExecution Engine\n    ↓\n\
                     Node Execution (Sequential/Parallel)\n    ↓\nIntegrations (350+ Services)\n    ↓\nOutput/Webhook",
                ),
                Section::pairs(
                    TECH_STACK,
                    [
                        ("Backend", "Node.js, TypeScript, Express"),
                        ("Frontend", "Vue.js 3, TypeScript"),
                        ("Database", "SQLite, PostgreSQL, MySQL"),
                        ("Queue", "Bull (Redis-based)"),
                        ("Deployment", "Docker, Kubernetes, npm"),
                    ],
                ),
                Section::bullets(
                    CORE_COMPONENTS,
                    [
                        "Visual Workflow Editor: 드래그 앤 드롭 인터페이스",
                        "Execution Engine: 노드 기반 순차/병렬 실행",
                        "Integration Nodes: 350+ 서비스 통합",
                        "Custom Code: JavaScript/TypeScript 코드 노드",
                    ],
                ),
            ],
            data_flow: vec![
                Section::code(
                    OVERALL_FLOW,
                    "Workflow Trigger (Webhook/Schedule/Manual) → Node Queue → 순차 실행 → \
                     데이터 변환 → API 호출 → 결과 저장/전송",
                ),
                Section::text(
                    ASYNC_PROCESSING,
                    "Queue 기반 비동기 실행. Webhook 트리거 지원. 스케줄 기반 자동 실행. \
                     병렬 노드 실행 지원.",
                ),
                Section::text(
                    DATA_STRUCTURE,
                    "JSON 기반 워크플로우 정의. 노드 간 데이터 흐름은 Key-Value 쌍 구조.",
                ),
            ],
            documentation: vec![
                Section::bullets(
                    DOC_STRUCTURE,
                    [
                        "Getting Started: Installation, 첫 워크플로우 생성",
                        "Nodes: 각 통합 노드별 상세 가이드",
                        "Workflows: 패턴, 베스트 프랙티스, 예제",
                        "Development: 커스텀 노드 개발, API 문서",
                        "Deployment: Self-hosting, Cloud, Docker",
                    ],
                ),
                Section::text(
                    DOC_PHILOSOPHY,
                    "실용적 예제 중심, 상세한 노드 별 가이드, 커뮤니티 컨트리뷰션 활발",
                ),
                Section::text(
                    COMMUNITY_SUPPORT,
                    "활발한 Forum, Discord, GitHub Discussions, 커뮤니티 노드 파트너 프로그램",
                ),
            ],
        },
    }
}
