//! Global CSS styles for Kindred.
//!
//! Warm editorial aesthetic: cream paper, ink text, rose and gold accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --cream: #faf6f1;
  --paper: #ffffff;
  --line: #e8e0d8;

  /* INK (Text) */
  --ink: #2b2430;
  --ink-soft: rgba(43, 36, 48, 0.68);
  --ink-muted: rgba(43, 36, 48, 0.45);

  /* ROSE (Primary accent) */
  --rose: #b4536a;
  --rose-deep: #933f56;
  --rose-soft: #f3dde2;

  /* GOLD (Premium) */
  --gold: #b98a2e;
  --gold-soft: #f5ead3;

  /* SEMANTIC */
  --sage: #5d7d62;
  --sage-soft: #e2ece4;
  --amber: #b07a1f;
  --amber-soft: #f6ecd8;
  --danger: #a63d3d;
  --danger-soft: #f4dddd;
  --slate: #6b6474;
  --slate-soft: #eceaef;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--cream);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
}

input, textarea {
  font-family: inherit;
}

/* === App Shell === */
.app-shell {
  display: flex;
  min-height: 100vh;
}

.page-main {
  flex: 1;
  padding: 2.5rem 3rem;
  max-width: 1040px;
}

.page-header {
  margin-bottom: 2rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--ink);
}

.page-subtitle {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  margin-top: 0.25rem;
}

/* === Admin Sidebar === */
.admin-sidebar {
  width: 220px;
  flex-shrink: 0;
  background: var(--paper);
  border-right: 1px solid var(--line);
  padding: 2rem 1rem;
  display: flex;
  flex-direction: column;
}

.sidebar-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--rose-deep);
  padding: 0 0.75rem;
  margin-bottom: 2rem;
}

.sidebar-nav {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.sidebar-link {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  padding: 0.55rem 0.75rem;
  border-radius: 8px;
  color: var(--ink-soft);
  text-decoration: none;
  font-size: var(--text-sm);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.sidebar-link:hover {
  background: var(--cream);
  color: var(--ink);
}

.sidebar-link.active {
  background: var(--rose-soft);
  color: var(--rose-deep);
  font-weight: 600;
}

.sidebar-link-icon {
  width: 1.25rem;
  text-align: center;
}

.sidebar-footer {
  margin-top: auto;
  padding: 0.75rem;
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

/* === Stats Cards === */
.stats-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1rem;
  margin-bottom: 2rem;
}

.stat-card {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 12px;
  padding: 1.25rem 1.5rem;
}

.stat-title {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--ink-muted);
}

.stat-value {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--ink);
  margin-top: 0.25rem;
}

.stat-trend {
  display: inline-block;
  margin-top: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 600;
  padding: 0.15rem 0.5rem;
  border-radius: 999px;
}

.trend-positive {
  color: var(--sage);
  background: var(--sage-soft);
}

.trend-negative {
  color: var(--danger);
  background: var(--danger-soft);
}

.trend-neutral {
  color: var(--slate);
  background: var(--slate-soft);
}

/* === Status Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
  white-space: nowrap;
}

.badge-icon {
  font-size: 0.7rem;
}

.badge-verified { color: var(--sage); background: var(--sage-soft); }
.badge-pending { color: var(--amber); background: var(--amber-soft); }
.badge-premium { color: var(--gold); background: var(--gold-soft); }
.badge-flagged { color: var(--danger); background: var(--danger-soft); }
.badge-paid { color: var(--sage); background: var(--sage-soft); }
.badge-unpaid { color: var(--amber); background: var(--amber-soft); }
.badge-confirmed { color: var(--rose-deep); background: var(--rose-soft); }
.badge-declined { color: var(--slate); background: var(--slate-soft); }

.badge-unknown {
  color: var(--slate);
  background: transparent;
  border: 1px dashed var(--slate);
}

/* === Panels and Tables === */
.panel {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 12px;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.panel-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 1rem;
}

.panel-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.data-table {
  width: 100%;
  border-collapse: collapse;
  font-size: var(--text-sm);
}

.data-table th {
  text-align: left;
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--ink-muted);
  font-weight: 600;
  padding: 0.5rem 0.75rem;
  border-bottom: 1px solid var(--line);
}

.data-table td {
  padding: 0.65rem 0.75rem;
  border-bottom: 1px solid var(--line);
  color: var(--ink);
}

.data-table tr:last-child td {
  border-bottom: none;
}

.table-secondary {
  color: var(--ink-soft);
}

/* === Empty States === */
.empty-state {
  text-align: center;
  padding: 3rem 1.5rem;
  color: var(--ink-soft);
}

.empty-state-icon {
  font-size: 2rem;
  color: var(--ink-muted);
}

.empty-state-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--ink);
  margin-top: 0.75rem;
}

.empty-state-description {
  font-size: var(--text-sm);
  margin-top: 0.35rem;
}

.empty-state-action {
  margin-top: 1.25rem;
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 8px;
  background: var(--rose);
  color: var(--paper);
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast);
}

.empty-state-action:hover {
  background: var(--rose-deep);
}

.empty-state-compact {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  padding: 1rem;
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

/* === Profile Page === */
.profile-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  margin-bottom: 2rem;
}

.profile-avatar {
  width: 72px;
  height: 72px;
  border-radius: 50%;
  background: var(--rose-soft);
  color: var(--rose-deep);
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
}

.profile-identity {
  flex: 1;
}

.profile-name {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
}

.profile-meta {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.profile-headline {
  font-size: var(--text-base);
  color: var(--ink-soft);
  font-style: italic;
  margin-top: 0.25rem;
}

.profile-columns {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 1.5rem;
  align-items: start;
}

/* === Profile Sections === */
.profile-section {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 12px;
  margin-bottom: 1rem;
  overflow: hidden;
}

.profile-section-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  padding: 1rem 1.25rem;
  background: none;
  border: none;
  text-align: left;
}

.profile-section-header.static {
  cursor: default;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--ink);
}

.section-chevron {
  color: var(--ink-muted);
  font-size: var(--text-xs);
  transition: transform var(--transition-fast);
}

.section-chevron.open {
  transform: rotate(180deg);
}

.profile-section-body {
  padding: 0 1.25rem 1rem;
}

.profile-field {
  display: flex;
  align-items: baseline;
  gap: 1rem;
  padding: 0.5rem 0;
  border-top: 1px solid var(--line);
}

.field-label {
  width: 120px;
  flex-shrink: 0;
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--ink-muted);
}

.field-value {
  font-size: var(--text-sm);
  color: var(--ink);
}

.field-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.field-tag {
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--cream);
  border: 1px solid var(--line);
  font-size: var(--text-xs);
  color: var(--ink-soft);
}

/* === Why You Matched === */
.why-matched {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 12px;
  padding: 1.5rem;
  margin-bottom: 1rem;
}

.why-matched-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.reason-list {
  list-style: none;
}

.reason-item {
  position: relative;
  padding: 0.35rem 0 0.35rem 1.4rem;
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.reason-item::before {
  content: '❧';
  position: absolute;
  left: 0;
  color: var(--rose);
}

.breakdown-list {
  margin-top: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.breakdown-item {
  display: flex;
  gap: 0.75rem;
}

.breakdown-icon {
  color: var(--rose);
  width: 1.5rem;
  text-align: center;
  flex-shrink: 0;
}

.breakdown-detail {
  flex: 1;
}

.breakdown-head {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
}

.breakdown-category {
  font-size: var(--text-sm);
  font-weight: 600;
  text-transform: capitalize;
}

.breakdown-score {
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--rose-deep);
}

.breakdown-bar {
  height: 6px;
  border-radius: 3px;
  background: var(--cream);
  margin: 0.35rem 0;
  overflow: hidden;
}

.breakdown-bar-fill {
  height: 100%;
  border-radius: 3px;
  background: var(--rose);
}

.breakdown-details {
  font-size: var(--text-xs);
  color: var(--ink-soft);
}

/* === Introduction Timeline === */
.timeline {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 12px;
  padding: 1.5rem;
}

.timeline-entry {
  display: flex;
  gap: 1rem;
}

.timeline-marker {
  display: flex;
  flex-direction: column;
  align-items: center;
  flex-shrink: 0;
}

.timeline-dot {
  width: 1.6rem;
  height: 1.6rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 0.7rem;
}

.timeline-dot.completed {
  background: var(--sage-soft);
  color: var(--sage);
}

.timeline-dot.current {
  background: var(--rose);
  color: var(--paper);
}

.timeline-dot.upcoming {
  background: var(--slate-soft);
  color: var(--slate);
}

.timeline-connector {
  flex: 1;
  width: 2px;
  min-height: 1.25rem;
  background: var(--line);
  margin: 0.25rem 0;
}

.timeline-body {
  padding-bottom: 1.25rem;
}

.timeline-date {
  font-size: var(--text-xs);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--ink-muted);
}

.timeline-description {
  font-size: var(--text-sm);
  color: var(--ink);
  margin-top: 0.15rem;
}

/* === Chat === */
.chat-panel {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 12px;
  display: flex;
  flex-direction: column;
  height: calc(100vh - 12rem);
  overflow: hidden;
}

.chat-messages {
  flex: 1;
  overflow-y: auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.message-row {
  display: flex;
  gap: 0.6rem;
  max-width: 75%;
}

.message-row-sent {
  align-self: flex-end;
  flex-direction: row-reverse;
}

.message-row-received {
  align-self: flex-start;
}

.message-avatar {
  width: 32px;
  height: 32px;
  border-radius: 50%;
  background: var(--gold-soft);
  color: var(--gold);
  font-size: var(--text-xs);
  font-weight: 600;
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  align-self: flex-end;
}

.message-bubble {
  padding: 0.6rem 0.9rem;
  border-radius: 14px;
  font-size: var(--text-sm);
}

.message-bubble-sent {
  background: var(--rose);
  color: var(--paper);
  border-bottom-right-radius: 4px;
}

.message-bubble-received {
  background: var(--cream);
  border: 1px solid var(--line);
  border-bottom-left-radius: 4px;
}

.message-sender {
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--gold);
  margin-bottom: 0.15rem;
}

.message-time {
  font-size: 0.65rem;
  opacity: 0.65;
  margin-top: 0.25rem;
}

.message-input-bar {
  display: flex;
  gap: 0.6rem;
  padding: 1rem;
  border-top: 1px solid var(--line);
  background: var(--paper);
}

.message-textarea {
  flex: 1;
  resize: none;
  border: 1px solid var(--line);
  border-radius: 10px;
  padding: 0.6rem 0.9rem;
  font-size: var(--text-sm);
  background: var(--cream);
  color: var(--ink);
}

.message-textarea:focus {
  outline: none;
  border-color: var(--rose);
}

.message-send-btn {
  border: none;
  border-radius: 10px;
  padding: 0 1.1rem;
  background: var(--slate-soft);
  color: var(--slate);
  font-weight: 600;
  font-size: var(--text-sm);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.message-send-btn.active {
  background: var(--rose);
  color: var(--paper);
}

.message-send-btn:disabled {
  cursor: default;
}

/* === Onboarding Wizard === */
.onboarding-card {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 12px;
  padding: 2rem;
  max-width: 560px;
}

.wizard-progress {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 2rem;
}

.wizard-step-dot {
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xs);
  font-weight: 600;
  background: var(--slate-soft);
  color: var(--slate);
}

.wizard-step-dot.active {
  background: var(--rose);
  color: var(--paper);
}

.wizard-step-dot.done {
  background: var(--rose-soft);
  color: var(--rose-deep);
}

.wizard-step-bar {
  flex: 1;
  height: 2px;
  background: var(--line);
}

.wizard-step-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 1.25rem;
}

.form-field {
  margin-bottom: 1rem;
}

.form-label {
  display: block;
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  color: var(--ink-muted);
  margin-bottom: 0.3rem;
}

.form-input, .form-textarea {
  width: 100%;
  border: 1px solid var(--line);
  border-radius: 8px;
  padding: 0.55rem 0.8rem;
  font-size: var(--text-sm);
  background: var(--cream);
  color: var(--ink);
}

.form-input:focus, .form-textarea:focus {
  outline: none;
  border-color: var(--rose);
}

.form-textarea {
  resize: vertical;
  min-height: 7rem;
}

.form-hint {
  font-size: var(--text-xs);
  color: var(--ink-muted);
  margin-top: 0.25rem;
}

.wizard-controls {
  display: flex;
  justify-content: space-between;
  margin-top: 2rem;
}

.btn-back {
  padding: 0.55rem 1.25rem;
  border: 1px solid var(--line);
  border-radius: 8px;
  background: var(--paper);
  color: var(--ink-soft);
  font-size: var(--text-sm);
  font-weight: 600;
}

.btn-back:disabled {
  opacity: 0.4;
  cursor: default;
}

.btn-continue {
  padding: 0.55rem 1.5rem;
  border: none;
  border-radius: 8px;
  background: var(--rose);
  color: var(--paper);
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast);
}

.btn-continue:hover {
  background: var(--rose-deep);
}

/* === Landing === */
.landing {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 2rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 600;
  color: var(--rose-deep);
}

.tagline {
  font-size: var(--text-lg);
  color: var(--ink-soft);
  margin-top: 0.5rem;
}

.btn-enter {
  margin-top: 2rem;
  padding: 0.8rem 2.5rem;
  border: none;
  border-radius: 999px;
  background: var(--rose);
  color: var(--paper);
  font-size: var(--text-base);
  font-weight: 600;
  transition: background var(--transition-normal);
}

.btn-enter:hover {
  background: var(--rose-deep);
}

.landing-links {
  margin-top: 1.5rem;
  display: flex;
  gap: 1.5rem;
  font-size: var(--text-sm);
}

.landing-link {
  color: var(--ink-soft);
  text-decoration: underline;
}

.landing-link:hover {
  color: var(--rose-deep);
}

.vision-section {
  max-width: 520px;
  margin-top: 3rem;
  font-size: var(--text-sm);
  color: var(--ink-soft);
}
"#;
