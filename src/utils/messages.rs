// ============================================================================
// UI MESSAGES - static Korean strings shown to the user
// ============================================================================

pub const APP_TITLE: &str = "DeepStation Helper";

// Login
pub const LOGIN_SUBTITLE: &str = "계정에 로그인하세요";
pub const LOGIN_GREETING: &str = "안녕하세요! 딥스 부이 예약에 어려움을 겪으시는 강사님들을 위해 개발된 도구입니다. 이 도구가 안전하고 즐거운 다이빙 경험에 도움이 되기를 바랍니다. 악용 없이 선한 목적으로만 사용해주시면 감사하겠습니다. 항상 안전하고 행복한 다이빙 되세요! 🤿";
pub const EMAIL_PLACEHOLDER: &str = "이메일 주소";
pub const PASSWORD_PLACEHOLDER: &str = "비밀번호";
pub const LOGIN_BUTTON: &str = "로그인";
pub const LOGIN_IN_PROGRESS: &str = "로그인 중...";
pub const LOGIN_PRIVACY_NOTE: &str = "이메일과 비밀번호는 서버에 저장되지 않고, 세션 토큰만 로컬에 저장됩니다.";
pub const LOGOUT_BUTTON: &str = "로그아웃";

// Errors
pub const LOGIN_FAILED: &str = "로그인에 실패했습니다. 이메일과 비밀번호를 확인해주세요.";
pub const INVALID_EMAIL: &str = "올바른 이메일 형식을 입력해주세요.";
pub const FETCH_FAILED: &str = "일정 정보를 가져오는데 실패했습니다.";
pub const MISSING_CREDENTIAL: &str = "쿠키 정보가 없습니다.";

// Schedule
pub const CHECKING_SESSION: &str = "로그인 상태를 확인하는 중...";
pub const LOADING_SCHEDULE: &str = "일정 정보를 불러오는 중...";
pub const SCHEDULE_TITLE: &str = "일정";
pub const REFRESH_BUTTON: &str = "새로고침";
pub const REFRESHING: &str = "로딩 중...";
pub const PICK_DATE_LABEL: &str = "날짜 선택";
pub const PREV_DAY: &str = "이전 날";
pub const NEXT_DAY: &str = "다음 날";

// Reservation table
pub const COLUMN_SLOT: &str = "시간대";
pub const COLUMN_REMAINING: &str = "잔여";
pub const COLUMN_BUOY: &str = "부이";
pub const COLUMN_STATUS: &str = "상태";
pub const FIRST_HALF: &str = "전반";
pub const SECOND_HALF: &str = "후반";
pub const SLOT_SUFFIX: &str = "부";
pub const COUNT_SUFFIX: &str = "개";
pub const BOOKABLE: &str = "예약가능";
pub const NOT_BOOKABLE: &str = "예약불가";
